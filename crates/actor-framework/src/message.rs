//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](crate::ResourceClient)
//! and [`ResourceActor`](crate::ResourceActor). Each request carries a
//! oneshot sender for the reply, so callers get a typed `Result` back without
//! sharing any state with the actor.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants follow a resource-oriented shape: lifecycle operations that
/// apply to any stored collection (`Create`, `Get`, `List`, `Update`) plus an
/// extensible `Action` variant for domain logic that does not fit the
/// uniform operations, such as guarded transitions or derived queries.
/// The generic parameter ties every payload to the entity's associated
/// types, so a payload for one entity kind cannot reach another's actor.
///
/// `List` returns the collection in insertion order; stores never reorder on
/// unrelated mutation, which callers rely on for stable listings.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
