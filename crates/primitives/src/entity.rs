use serde::{Deserialize, Serialize};

/// State of an embedded, non-editable entity at snapshot time.
///
/// The core never interprets `state`; it is handed back to the entity owner
/// through an [`EntityStateUpdate`] when the snapshot is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
	/// Entity identifier, unique within the document.
	pub id: String,
	/// Entity type tag, as registered by the entity owner.
	#[serde(rename = "type")]
	pub entity_type: String,
	/// Owner-defined state payload.
	pub state: String,
}

impl EntityState {
	pub fn new(
		id: impl Into<String>,
		entity_type: impl Into<String>,
		state: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			entity_type: entity_type.into(),
			state: state.into(),
		}
	}
}

/// Request asking the surrounding system which entity states apply to a
/// snapshot taken at a sub-root.
///
/// Responders append to `entity_states`; the builder reads the list back once
/// every responder has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStateRequest<N> {
	/// The logical root the snapshot is being taken for.
	pub logical_root: N,
	/// Entity states collected so far.
	pub entity_states: Vec<EntityState>,
}

impl<N> EntityStateRequest<N> {
	pub fn new(logical_root: N) -> Self {
		Self {
			logical_root,
			entity_states: Vec::new(),
		}
	}
}

/// Notification that an entity's state should be re-applied after restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStateUpdate {
	pub entity_id: String,
	pub entity_type: String,
	pub state: String,
}

impl From<&EntityState> for EntityStateUpdate {
	fn from(state: &EntityState) -> Self {
		Self {
			entity_id: state.id.clone(),
			entity_type: state.entity_type.clone(),
			state: state.state.clone(),
		}
	}
}
