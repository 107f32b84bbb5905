//! Executes dispatcher effects against a `UserClient`.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::infra::github::UserClient;

use super::dispatch::{Effect, Event, Store};

/// Perform the network call described by `effect` and return its resolution.
pub async fn execute(client: &dyn UserClient, effect: Effect) -> Event {
    match effect {
        Effect::FetchProfile { token, username } => Event::ProfileFetchResolved {
            token,
            result: client.fetch_user(&username).await,
        },
        Effect::FetchRepositories { token, login } => Event::RepoFetchResolved {
            token,
            result: client.fetch_repositories(&login).await,
        },
    }
}

/// Dispatch `event` and keep executing follow-up effects in order until the
/// store stops asking for more. Used where nothing else can interleave.
pub async fn drive(store: &mut Store, client: &dyn UserClient, event: Event) {
    let mut next = store.dispatch(event);
    while let Some(effect) = next {
        let resolution = execute(client, effect).await;
        next = store.dispatch(resolution);
    }
}

/// Spawns effects on a tokio runtime and posts resolutions back to the
/// event loop's channel, so the loop never waits on the network.
pub struct EffectRunner<E> {
    client: Arc<dyn UserClient>,
    handle: Handle,
    sender: Sender<E>,
}

impl<E> EffectRunner<E>
where
    E: From<Event> + Send + 'static,
{
    pub fn new(client: Arc<dyn UserClient>, handle: Handle, sender: Sender<E>) -> Self {
        Self {
            client,
            handle,
            sender,
        }
    }

    pub fn run(&self, effect: Effect) {
        tracing::debug!(token = ?effect.token(), "spawning fetch");
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        self.handle.spawn(async move {
            let resolution = execute(&*client, effect).await;
            // The receiver is gone once the UI has quit.
            let _ = sender.send(resolution.into());
        });
    }
}
