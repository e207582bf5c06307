use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::portal::repo::memory::InMemoryPortalRepository;
use service::portal::{CustomerPortal, PortalService};

fn bench_login(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = Arc::new(InMemoryPortalRepository::new());
    rt.block_on(repo.insert_user("bench", "bench@example.com", "Bench", "Benchmark1")).unwrap();
    let svc = PortalService::new(repo);

    c.bench_function("portal_login_verify", |b| {
        b.iter(|| {
            let user = rt.block_on(svc.validate_login("bench", "Benchmark1")).unwrap();
            assert!(user.is_some());
        });
    });
}

fn bench_attach_list_delete(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = Arc::new(InMemoryPortalRepository::new());
    let user = rt.block_on(repo.insert_user("bench", "bench@example.com", "Bench", "Benchmark1")).unwrap();
    rt.block_on(repo.insert_simple_policy(4242)).unwrap();
    let svc = PortalService::new(repo);

    c.bench_function("portal_attach_list_delete", |b| {
        b.iter(|| {
            rt.block_on(async {
                svc.add_policy_number_to_policy_list(user.id, 4242).await.unwrap();
                assert_eq!(svc.get_policy_numbers_of_user(user.id).await.unwrap().len(), 1);
                svc.delete_policy_number(4242).await.unwrap();
            })
        });
    });
}

criterion_group!(benches, bench_login, bench_attach_list_delete);
criterion_main!(benches);
