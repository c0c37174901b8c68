use crate::{
    db::{
        db::{Db, DB_FILE_NAME},
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{data_storage::DataStorage, messages::Message},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::new_without_migrations(DataStorage::new().get_path(DB_FILE_NAME)?)?;

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;
            let latest = MigrationManager::new().latest_version();

            msg_print!(Message::DatabaseVersion(version, latest));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = MigrationManager::new().get_migration_history(&conn).unwrap_or_default();

            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
    }

    Ok(())
}
