use vanity::{ClientConfig, CompletedRequest, Notification, ShowRequest};

#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    env_logger::init();

    // Without VANITY_URL and VANITY_TOKEN the client runs disconnected and never talks to a
    // server.
    let config = match (std::env::var("VANITY_URL"), std::env::var("VANITY_TOKEN")) {
        (Ok(base_url), Ok(token)) => ClientConfig::new(base_url, token),
        _ => ClientConfig::disconnected(),
    };
    let client = config
        .to_client(|notification: Notification| {
            eprintln!("vanity {}: {:?}", notification.name(), notification);
        })
        .unwrap();

    let signup = client.split("signup").unwrap();

    // Wait for the server, so the alternative is the one it stores.
    let assignment = signup
        .show_confirmed(ShowRequest::new("test-participant"))
        .await
        .unwrap();
    println!("Alternative: {}", assignment.alternative);
    if let Some(conflict) = assignment.conflict {
        println!("Server overrode alternative {}", conflict.desired);
    }

    signup
        .completed_confirmed(CompletedRequest::new("test-participant"))
        .await
        .unwrap();

    if client.is_connected() {
        let stats = signup.stats().await.unwrap();
        println!("Stats: {:?}", stats);
    }
}
