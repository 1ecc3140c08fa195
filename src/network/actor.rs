//! Network actor - executes control commands in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::RobotClient;

/// Network actor that processes control command dispatches.
///
/// Every send is fire-and-forget from the App layer's point of view: the
/// POST runs as its own task and reports back as a `NetworkResponse`, so a
/// slow or failed send never blocks later sends.
pub struct NetworkActor {
    client: RobotClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: RobotClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::SendControl { id, command }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, action = command.action_str(), "Sending control command");
                                let response = match client.send_control(&command).await {
                                    Ok(()) => NetworkResponse::ControlSuccess { id, command },
                                    Err(err) => NetworkResponse::ControlError {
                                        id,
                                        command,
                                        message: format!("Error sending command: {err:#}"),
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
