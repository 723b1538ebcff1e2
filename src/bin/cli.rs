use clap::{Parser, Subcommand};
use serde_json::json;
use userbase::{
    config::AppConfig,
    db,
    repositories::user_repository::SqliteUserRepository,
    routes::ROUTES,
    services::user_service::{UserService, UserServiceError},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "userbase-cli")]
#[command(about = "CLI tool for managing userbase users", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Print the HTTP route table
    Routes,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,
    },

    /// List all users
    List,

    /// Show a single user
    Show {
        /// User ID
        #[arg(short, long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Routes => print_routes(),
        Commands::User { command } => run_user_command(command).await?,
    }

    Ok(())
}

fn print_routes() {
    println!("{:<8} {:<14} {:<14} {}", "Method", "Path", "Handler", "Auth");
    println!("{}", "-".repeat(44));
    for route in ROUTES {
        println!(
            "{:<8} {:<14} {:<14} {}",
            route.method,
            route.path,
            route.handler,
            if route.requires_auth { "yes" } else { "no" }
        );
    }
}

async fn run_user_command(command: UserCommands) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;
    db::init_schema(&pool).await?;

    // Initialize services
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let user_service = UserService::new(user_repository);

    match command {
        UserCommands::Create { name, email } => {
            match user_service
                .create_user(&json!({ "name": name, "email": email }))
                .await
            {
                Ok(user) => {
                    println!("✅ User created successfully!");
                    println!("  ID: {}", user.id);
                    println!("  Name: {}", user.name);
                    println!("  Email: {}", user.email);
                }
                Err(err) => {
                    eprintln!("❌ Failed to create user: {}", err);
                    std::process::exit(1);
                }
            }
        }

        UserCommands::List => match user_service.list_users().await {
            Ok(users) => {
                if users.is_empty() {
                    println!("No users found.");
                } else {
                    println!("{:<5} {:<30} {:<40}", "ID", "Name", "Email");
                    println!("{}", "-".repeat(75));
                    for user in users {
                        println!("{:<5} {:<30} {:<40}", user.id, user.name, user.email);
                    }
                }
            }
            Err(err) => {
                eprintln!("❌ Failed to list users: {}", err);
                std::process::exit(1);
            }
        },

        UserCommands::Show { id } => match user_service.find_user_by_id(id).await {
            Ok(user) => {
                println!("  ID: {}", user.id);
                println!("  Name: {}", user.name);
                println!("  Email: {}", user.email);
            }
            Err(UserServiceError::UserNotFound) => {
                eprintln!("❌ User {} not found", id);
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("❌ Failed to find user: {}", err);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
