//! The two games and their seed labels.

use bingo_grid::{CellId, GridError, Seed};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which of the two boards a grid belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameKind {
    /// Sustainable travel around the conference.
    #[default]
    Sustainability,
    /// Sessions, networking and takeaways.
    Learning,
}

impl GameKind {
    /// Both games in tab order.
    pub const ALL: [GameKind; 2] = [GameKind::Sustainability, GameKind::Learning];

    /// Returns the board title.
    #[instrument]
    pub fn title(self) -> &'static str {
        match self {
            Self::Sustainability => "Sustainability Travel",
            Self::Learning => "Conference Learning",
        }
    }

    /// Returns the store key the grid snapshot lives under.
    #[instrument]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Sustainability => "sustainability-bingo-items",
            Self::Learning => "learning-bingo-items",
        }
    }

    /// Switches to the other game.
    #[instrument]
    pub fn other(self) -> Self {
        match self {
            Self::Sustainability => Self::Learning,
            Self::Learning => Self::Sustainability,
        }
    }

    /// Returns the 25 labels in grid order.
    pub fn labels(self) -> &'static [&'static str; 25] {
        match self {
            Self::Sustainability => &SUSTAINABILITY_LABELS,
            Self::Learning => &LEARNING_LABELS,
        }
    }

    /// Builds this game's seed with the given locked ids.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if a locked id is not in `1..=25`.
    #[instrument(skip(locked))]
    pub fn seed(self, locked: impl IntoIterator<Item = CellId>) -> Result<Seed, GridError> {
        Seed::from_labels(self.labels(), locked)
    }
}

const SUSTAINABILITY_LABELS: [&str; 25] = [
    "Took the train from the airport",
    "Walked to a conference venue",
    "Rode a bike share",
    "Used public transit downtown",
    "Carpooled with another attendee",
    "Brought a reusable water bottle",
    "Refused a single-use plastic bag",
    "Ate a fully plant-based meal",
    "Reused your hotel towel",
    "Skipped daily housekeeping",
    "Used a reusable coffee cup",
    "Picked up a digital agenda instead of print",
    "FREE SPACE: Arrived at the conference",
    "Recycled or composted correctly",
    "Chose a local restaurant",
    "Turned off lights leaving your room",
    "Took the stairs instead of the elevator",
    "Bought a locally made souvenir",
    "Shared a ride to an evening event",
    "Offset your travel emissions",
    "Visited a city park on foot",
    "Packed light (carry-on only)",
    "Unplugged chargers when not in use",
    "Asked a vendor about their sustainability",
    "Talked with someone about low-carbon travel",
];

const LEARNING_LABELS: [&str; 25] = [
    "Attended the opening keynote",
    "Asked a question in a session",
    "Met someone from another country",
    "Visited three exhibitor booths",
    "Attended a poster session",
    "Learned a new evaluation method",
    "Exchanged contact details with a new colleague",
    "Attended a session outside your field",
    "Took notes you will share with your team",
    "Joined a lunch table of strangers",
    "Heard about a program you want to copy",
    "Attended a panel discussion",
    "FREE SPACE: Registered for the conference",
    "Connected with a speaker afterwards",
    "Attended an evening networking event",
    "Learned a new acronym",
    "Discussed data quality with someone",
    "Found a useful tool or resource",
    "Attended a workshop",
    "Posted a takeaway on social media",
    "Met a first-time attendee",
    "Heard a story about market transformation",
    "Attended the closing plenary",
    "Wrote down three action items",
    "Thanked a session organizer",
];
