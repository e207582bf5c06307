use crate::db::connect;
use crate::{brand, car_model, fueltype, policy, policyvehicle, portal_user, rto, user_policy_list, vehicle, vehicletype};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use anyhow::Result;
use chrono::NaiveDate;
use migration::MigratorTrait;
use uuid::Uuid;

/// Connect and migrate; `None` when the database is unavailable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

fn unique_policy_number() -> i32 {
    // Keep inside i32 and away from hand-seeded low numbers
    1_000_000 + (Uuid::new_v4().as_u128() % 1_000_000_000) as i32
}

#[tokio::test]
async fn test_policy_attachment_chain() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let tag = Uuid::new_v4().simple().to_string();

    let b = brand::ActiveModel { name: Set(format!("brand_{tag}")), ..Default::default() }.insert(&db).await?;
    let m = car_model::ActiveModel { brand_id: Set(b.id), name: Set("Swift".into()), ..Default::default() }.insert(&db).await?;
    let f = fueltype::ActiveModel { name: Set(format!("fuel_{}", &tag[..8])), ..Default::default() }.insert(&db).await?;
    let vt = vehicletype::ActiveModel { name: Set(format!("vt_{}", &tag[..8])), ..Default::default() }.insert(&db).await?;
    let r = rto::ActiveModel {
        code: Set(format!("R{}", &tag[..8])),
        city: Set("Pune".into()),
        state: Set("Maharashtra".into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let chassis = format!("CH{}", &tag[..16]);
    let v = vehicle::create(&db, vehicle::NewVehicle {
        registration_number: "MH12AB1234".into(),
        chassis_number: chassis.clone(),
        engine_number: "EN0001".into(),
        brand_id: b.id,
        model_id: m.id,
        variant_id: None,
        fueltype_id: f.id,
        bodytype_id: None,
        transmissiontype_id: None,
        vehicletype_id: vt.id,
        rto_id: r.id,
        colour: Some("Red".into()),
        manufacture_year: 2021,
    })
    .await?;

    let pn = unique_policy_number();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    policy::create(&db, pn, start, end, 5400.0).await?;
    policyvehicle::create(&db, pn, v.id).await?;

    let link = policyvehicle::find_by_policy_number(&db, pn).await?;
    assert_eq!(link.map(|l| l.vehicle_id), Some(v.id));

    assert!(vehicle::find_by_id_and_chassis(&db, v.id, &chassis).await?.is_some());
    assert!(vehicle::find_by_id_and_chassis(&db, v.id, &format!(" {chassis} ")).await?.is_some());
    assert!(vehicle::find_by_id_and_chassis(&db, v.id, "WRONG").await?.is_none());

    let u = portal_user::create(&db, &format!("user_{tag}"), "u@example.com", "U", "$argon2id$stub".into()).await?;
    let found = portal_user::find_by_username(&db, &u.username).await?;
    assert_eq!(found.map(|x| x.id), Some(u.id));

    user_policy_list::create(&db, u.id, pn).await?;
    let listed = user_policy_list::list_by_user(&db, u.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].policy_number, pn);

    assert_eq!(user_policy_list::delete_by_policy_number(&db, pn).await?, 1);
    assert_eq!(user_policy_list::delete_by_policy_number(&db, pn).await?, 0);

    // Cleanup in reverse order
    portal_user::Entity::delete_by_id(u.id).exec(&db).await?;
    policy::Entity::delete_by_id(pn).exec(&db).await?;
    vehicle::Entity::delete_by_id(v.id).exec(&db).await?;
    rto::Entity::delete_by_id(r.id).exec(&db).await?;
    vehicletype::Entity::delete_by_id(vt.id).exec(&db).await?;
    fueltype::Entity::delete_by_id(f.id).exec(&db).await?;
    brand::Entity::delete_by_id(b.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_policy_rejects_inverted_dates() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let res = policy::create(&db, unique_policy_number(), start, end, 100.0).await;
    assert!(matches!(res, Err(crate::errors::ModelError::Validation(_))));
    Ok(())
}
