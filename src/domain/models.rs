use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the games CSV, exactly as found on disk. Everything is
/// optional text; typing happens during cleaning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGameRow {
    #[serde(rename = "Event")]
    pub event: Option<String>,
    #[serde(rename = "White")]
    pub white: Option<String>,
    #[serde(rename = "Black")]
    pub black: Option<String>,
    #[serde(rename = "Result")]
    pub result: Option<String>,
    #[serde(rename = "UTCDate")]
    pub utc_date: Option<String>,
    #[serde(rename = "UTCTime")]
    pub utc_time: Option<String>,
    #[serde(rename = "WhiteElo")]
    pub white_elo: Option<String>,
    #[serde(rename = "BlackElo")]
    pub black_elo: Option<String>,
    #[serde(rename = "WhiteRatingDiff")]
    pub white_rating_diff: Option<String>,
    #[serde(rename = "BlackRatingDiff")]
    pub black_rating_diff: Option<String>,
    #[serde(rename = "ECO")]
    pub eco: Option<String>,
    #[serde(rename = "Opening")]
    pub opening: Option<String>,
    #[serde(rename = "TimeControl")]
    pub time_control: Option<String>,
    #[serde(rename = "Termination")]
    pub termination: Option<String>,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameOutcome {
    pub const ALL: [GameOutcome; 3] =
        [GameOutcome::WhiteWin, GameOutcome::BlackWin, GameOutcome::Draw];

    /// Accepts the dataset encoding ("1-0") as well as the spelled-out form.
    /// Unterminated games ("*") and anything else are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1-0" | "white_win" => Some(GameOutcome::WhiteWin),
            "0-1" | "black_win" => Some(GameOutcome::BlackWin),
            "1/2-1/2" | "draw" => Some(GameOutcome::Draw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameOutcome::WhiteWin => "white_win",
            GameOutcome::BlackWin => "black_win",
            GameOutcome::Draw => "draw",
        }
    }

    pub fn is_decisive(&self) -> bool {
        !matches!(self, GameOutcome::Draw)
    }
}

/// Added time per move vs a fixed budget for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeControlCategory {
    Increment,
    Standard,
}

impl TimeControlCategory {
    pub const ALL: [TimeControlCategory; 2] =
        [TimeControlCategory::Increment, TimeControlCategory::Standard];

    pub fn as_str(&self) -> &str {
        match self {
            TimeControlCategory::Increment => "increment",
            TimeControlCategory::Standard => "standard",
        }
    }
}

/// Strength band derived from the white player's rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthCategory {
    Beginner, // < 1600
    Club,     // 1600-1999
    Expert,   // 2000-2399
    Master,   // 2400+
}

impl StrengthCategory {
    pub const ALL: [StrengthCategory; 4] = [
        StrengthCategory::Beginner,
        StrengthCategory::Club,
        StrengthCategory::Expert,
        StrengthCategory::Master,
    ];

    pub fn from_rating(rating: u32) -> Self {
        if rating >= 2400 {
            StrengthCategory::Master
        } else if rating >= 2000 {
            StrengthCategory::Expert
        } else if rating >= 1600 {
            StrengthCategory::Club
        } else {
            StrengthCategory::Beginner
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StrengthCategory::Beginner => "beginner",
            StrengthCategory::Club => "club",
            StrengthCategory::Expert => "expert",
            StrengthCategory::Master => "master",
        }
    }
}

/// One cleaned game. Constructed once by the cleaner, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub id: u64,
    pub white_rating: u32,
    pub black_rating: u32,
    pub outcome: GameOutcome,
    /// Raw opening name as recorded in the dataset.
    pub opening: String,
    /// Normalized opening label; `None` when the name is empty or unknown.
    /// Such records sit out the opening statistic but count everywhere else.
    pub opening_family: Option<String>,
    pub time_control: TimeControlCategory,
    pub date: Option<NaiveDate>,
    pub strength: StrengthCategory,
}

impl GameRecord {
    /// Mean of the two player ratings.
    pub fn mean_rating(&self) -> f64 {
        f64::from(self.white_rating + self.black_rating) / 2.0
    }
}
