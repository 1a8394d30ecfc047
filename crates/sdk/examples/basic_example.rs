use clickup_sdk::{ClickUp, ClientConfig, ConfigOverrides, GetTasksParams};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=clickup_sdk=debug shows every request
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Token comes from CLICKUP_API_TOKEN (a .env file works too)
    let clickup = ClickUp::new(ClientConfig::from_env()?);

    let user = match clickup.authorization.get_authorized_user().await {
        Ok(response) => {
            println!("Authenticated as {:?}", response.user.username);
            response.user
        }
        Err(e) => {
            println!("Authentication failed: {} ({})", e, e.code().as_str());
            return Ok(());
        }
    };
    println!("User id {}", user.id);

    let Some(team_id) = std::env::args().nth(1) else {
        println!("Pass a workspace id to list its spaces");
        return Ok(());
    };

    match clickup.spaces.get_spaces(&team_id, Some(false)).await {
        Ok(spaces) => {
            for space in spaces.spaces {
                println!("Space {} - {}", space.id, space.name);
            }
        }
        Err(e) => println!("Failed to get spaces: {}", e),
    }

    // Config-level override: a derived client with an extra header on every request; `clickup` is unchanged
    let traced = clickup.with_config(ConfigOverrides {
        headers: Some(serde_json::Map::from_iter([("X-Request-Source".to_string(), "demo".into())])),
        ..Default::default()
    });

    if let Some(list_id) = std::env::args().nth(2) {
        match traced.tasks.get_tasks(&list_id, &GetTasksParams::default()).await {
            Ok(tasks) => println!("Found {} tasks", tasks.tasks.len()),
            Err(e) => println!("Failed to get tasks: {}", serde_json::to_string(&e.to_info())?),
        }
    }

    Ok(())
}
