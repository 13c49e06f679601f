//! Background forced-logout polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::session::SessionManager;

/// Drive [`SessionManager::check_forced_logout`] on a fixed period until a
/// forced logout tears the session down.
///
/// Checks that find no session are cheap no-ops, so the task can be started
/// before login. Overlapping checks, from several pollers or a poller plus
/// a manual call, are safe: the last-check timestamp is last-write-wins and
/// a second teardown of an already-cleared store is a no-op.
pub fn poll_forced_logout(manager: Arc<SessionManager>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if manager.check_forced_logout().await {
                debug!("forced-logout poll stopping, session torn down");
                break;
            }
        }
    })
}
