pub mod common;
pub mod history;
pub mod knowledge;
pub mod unit;

pub use common::{ParseUnitIdError, Position, UnitId};
pub use history::ActionHistory;
pub use knowledge::{Knowledge, KnowledgeArchive, KnowledgeCategory, KnowledgeId};
pub use unit::{EnemyState, PLAYER_TACTICS, UnitKind, UnitState};
