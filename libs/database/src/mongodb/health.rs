use mongodb::Client;

use super::connector::ping;

/// `true` when the server answers a ping.
pub async fn check_health(client: &Client) -> bool {
    ping(client).await.is_ok()
}
