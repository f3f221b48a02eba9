use std::env;

use anyhow::{bail, Context, Result};
use diesel::prelude::*;
use diesel::PgConnection;

use courtz::{
    auth::password::hash_password,
    config::AppConfig,
    db,
    models::{CaseStatus, NewDocket, NewFiler, NewUser},
    schema::{dockets, filers, users},
};

const USAGE: &str = "Usage:
  maintenance hash-password <password>
  maintenance create-filer <username> <password> <first-name> <last-name> [--staff]
  maintenance create-docket <case-number>";

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    match (command.as_str(), &args[1..]) {
        ("hash-password", [password]) => println!("{}", hash_password(password)?),
        ("create-filer", [username, password, first_name, last_name, rest @ ..]) => {
            let is_staff = match rest {
                [] => false,
                [flag] if flag == "--staff" => true,
                _ => bail!("unexpected arguments: {}\n{USAGE}", rest.join(" ")),
            };
            let mut conn = connect()?;
            let filer_id = create_filer(
                &mut conn, username, password, first_name, last_name, is_staff,
            )?;
            println!("Created filer {filer_id} for user {username}.");
        }
        ("create-docket", [case_num]) => {
            let mut conn = connect()?;
            let docket_id: i32 = diesel::insert_into(dockets::table)
                .values(&NewDocket {
                    case_num: case_num.clone(),
                    status_id: CaseStatus::Open.id(),
                })
                .returning(dockets::id)
                .get_result(&mut conn)
                .context("failed to insert docket")?;
            println!("Created docket {docket_id} ({case_num}).");
        }
        _ => {
            eprintln!("Unknown command: {}\n{USAGE}", args.join(" "));
            std::process::exit(1);
        }
    }

    Ok(())
}

fn connect() -> Result<db::PgPooledConnection> {
    let config = AppConfig::from_env()?;
    eprintln!("Using database {}", config.redacted_database_url());
    let pool = db::init_pool(&config.database_url)?;
    db::run_migrations(&pool)?;
    pool.get().context("failed to get database connection")
}

fn create_filer(
    conn: &mut PgConnection,
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    is_staff: bool,
) -> Result<i32> {
    let password_hash = hash_password(password)?;
    conn.transaction::<_, anyhow::Error, _>(|conn| {
        let user_id: i32 = diesel::insert_into(users::table)
            .values(&NewUser {
                username: username.to_string(),
                password_hash,
                is_staff,
            })
            .returning(users::id)
            .get_result(conn)
            .context("failed to insert user")?;

        let filer_id: i32 = diesel::insert_into(filers::table)
            .values(&NewFiler {
                user_id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
            .returning(filers::id)
            .get_result(conn)
            .context("failed to insert filer")?;

        Ok(filer_id)
    })
}
