//! Poll loops - fixed-cadence fetchers for robot state and logs
//!
//! Each loop ticks on its own interval, issuing the first fetch immediately.
//! A tick never waits for the previous request: the fetch is spawned with the
//! tick's sequence number and the App layer discards whichever response
//! arrives out of order. Failures are retried at the same cadence, no backoff.

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::constants::{
    LOGS_FETCH_ERROR, LOGS_POLL_INTERVAL, STATE_FETCH_ERROR, STATE_POLL_INTERVAL,
};
use crate::messages::NetworkResponse;
use crate::network::client::RobotClient;

/// Poll `/state` every 100ms until shutdown is signalled
pub async fn run_state_poller(
    client: RobotClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(STATE_POLL_INTERVAL);
    let mut seq: u64 = 0;

    loop {
        tokio::select! {
            _ = shutdown_rx.changed() => {
                debug!("State poller shutting down");
                break;
            }
            _ = interval.tick() => {
                seq += 1;
                let client = client.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_state().await.map_err(|err| {
                        warn!(seq, error = ?err, "State fetch failed");
                        String::from(STATE_FETCH_ERROR)
                    });
                    // No-op after teardown: the receiver is gone by then
                    let _ = response_tx.send(NetworkResponse::State { seq, result });
                });
            }
        }
    }
}

/// Poll `/logs` every second until shutdown is signalled
pub async fn run_logs_poller(
    client: RobotClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(LOGS_POLL_INTERVAL);
    let mut seq: u64 = 0;

    loop {
        tokio::select! {
            _ = shutdown_rx.changed() => {
                debug!("Logs poller shutting down");
                break;
            }
            _ = interval.tick() => {
                seq += 1;
                let client = client.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_logs().await.map_err(|err| {
                        warn!(seq, error = ?err, "Logs fetch failed");
                        String::from(LOGS_FETCH_ERROR)
                    });
                    let _ = response_tx.send(NetworkResponse::Logs { seq, result });
                });
            }
        }
    }
}
