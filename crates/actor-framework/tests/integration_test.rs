use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;
use tokio::sync::mpsc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: String,
    title: String,
    closed: bool,
}

#[derive(Debug)]
struct TicketCreate {
    id: String,
    title: String,
}

#[derive(Debug)]
struct TicketUpdate {
    title: Option<String>,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("Ticket title must not be empty")]
    EmptyTitle,
    #[error("Ticket is already closed")]
    AlreadyClosed,
}

/// Context carries the commit observer; `()` would do for entities
/// without one.
type TicketContext = Option<mpsc::UnboundedSender<Vec<Ticket>>>;

#[async_trait]
impl ActorEntity for Ticket {
    type Id = String;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = ();
    type Context = TicketContext;
    type Error = TicketError;

    fn from_create_params(params: TicketCreate) -> Result<Self, Self::Error> {
        if params.title.is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        Ok(Self {
            id: params.id,
            title: params.title,
            closed: false,
        })
    }

    fn id(&self) -> &String {
        &self.id
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {
            TicketAction::Close => {
                if self.closed {
                    return Err(TicketError::AlreadyClosed);
                }
                self.closed = true;
                Ok(())
            }
        }
    }

    async fn on_commit(snapshot: &[Self], ctx: &Self::Context) {
        if let Some(observer) = ctx {
            let _ = observer.send(snapshot.to_vec());
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(None));

    // 1. Create with a caller-supplied id
    let id = client
        .create(TicketCreate {
            id: "tkt_1".to_string(),
            title: "Broken crate".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(id, "tkt_1");

    // 2. Creating the same id again is rejected and changes nothing
    let dup = client
        .create(TicketCreate {
            id: "tkt_1".to_string(),
            title: "Duplicate".to_string(),
        })
        .await;
    assert!(matches!(dup, Err(FrameworkError::AlreadyExists(_))));
    assert_eq!(client.list().await.unwrap().len(), 1);

    // 3. Update
    let updated = client
        .update(
            id.clone(),
            TicketUpdate {
                title: Some("Broken crate lid".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Broken crate lid");

    // 4. Action
    client
        .perform_action(id.clone(), TicketAction::Close)
        .await
        .unwrap();
    let ticket = client.get(id.clone()).await.unwrap().unwrap();
    assert!(ticket.closed);

    // 5. Action rejected by entity logic leaves state intact
    let again = client.perform_action(id.clone(), TicketAction::Close).await;
    assert!(matches!(again, Err(FrameworkError::EntityError(_))));

    // 6. Unknown id
    let missing = client.get("tkt_404".to_string()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(None));

    for n in 1..=4 {
        client
            .create(TicketCreate {
                id: format!("tkt_{n}"),
                title: format!("Ticket {n}"),
            })
            .await
            .unwrap();
    }

    // Mutating an early entry must not reorder the listing
    client
        .perform_action("tkt_2".to_string(), TicketAction::Close)
        .await
        .unwrap();

    let ids: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec!["tkt_1", "tkt_2", "tkt_3", "tkt_4"]);
}

#[tokio::test]
async fn test_commit_hook_fires_only_on_success() {
    let (observer_tx, mut observer_rx) = mpsc::unbounded_channel();
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(Some(observer_tx)));

    client
        .create(TicketCreate {
            id: "tkt_1".to_string(),
            title: "First".to_string(),
        })
        .await
        .unwrap();
    let snapshot = observer_rx.recv().await.unwrap();
    assert_eq!(snapshot.len(), 1);

    // A rejected create must not produce a commit
    let _ = client
        .create(TicketCreate {
            id: "tkt_2".to_string(),
            title: String::new(),
        })
        .await;
    client
        .perform_action("tkt_1".to_string(), TicketAction::Close)
        .await
        .unwrap();

    // The next observed snapshot comes from the action, not the failed create
    let snapshot = observer_rx.recv().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot[0].closed);
}
