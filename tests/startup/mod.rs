use bugbase::server::{config::Config, service::lookup::RoleService, startup};
use migration::{DEFAULT_ROLES, DEFAULT_STATES};

/// Expect connecting to run the migrations, including the seeded lookup rows
#[tokio::test]
async fn connect_runs_migrations_and_seeds_lookups() {
    let config = Config::from_lookup(|var| match var {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .unwrap();

    let db = startup::connect_to_database(&config).await.unwrap();

    let roles = RoleService::new(&db).get_roles().await.unwrap();
    let role_names: Vec<_> = roles
        .iter()
        .filter_map(|role| role.role_name.as_deref())
        .collect();
    assert_eq!(role_names, DEFAULT_ROLES);

    let states = bugbase::server::service::lookup::StateService::new(&db)
        .get_states()
        .await
        .unwrap();
    assert_eq!(states.len(), DEFAULT_STATES.len());
}
