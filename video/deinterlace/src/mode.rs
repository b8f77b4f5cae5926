/*!
    Deinterlacing modes and their resolution from configuration.
*/

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use video_types::Field;

use crate::render::Pass;

/**
    Reconstruction algorithm selected for a deinterlacer.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Keep the top field, drop the bottom one
    #[default]
    Discard,
    /// Average each pair of rows
    Mean,
    /// Average each row with the one above it
    Blend,
    /// Show both fields as separate frames
    Bob,
    /// Show both fields, interpolating the missing rows
    Linear,
}

impl Mode {
    /// Every mode, in configuration listing order.
    pub const ALL: [Self; 5] = [
        Self::Discard,
        Self::Blend,
        Self::Mean,
        Self::Bob,
        Self::Linear,
    ];

    /**
        Returns the canonical configuration name of the mode.
    */
    pub const fn name(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Mean => "mean",
            Self::Blend => "blend",
            Self::Bob => "bob",
            Self::Linear => "linear",
        }
    }

    /**
        Returns true if the mode emits two frames per input frame.
    */
    pub const fn is_double_rate(self) -> bool {
        matches!(self, Self::Bob | Self::Linear)
    }

    /**
        Returns the output height relative to the input for 4:2:0 input.
    */
    pub const fn output_height(self) -> OutputHeight {
        match self {
            Self::Discard | Self::Mean | Self::Bob => OutputHeight::Half,
            Self::Blend | Self::Linear => OutputHeight::Full,
        }
    }

    /**
        Returns the passes run for every input frame, one per output frame.
    */
    pub const fn passes(self) -> &'static [Pass] {
        match self {
            Self::Discard => &[Pass::Field(Field::Top)],
            Self::Mean => &[Pass::Mean],
            Self::Blend => &[Pass::Blend],
            Self::Bob => &[Pass::Field(Field::Top), Pass::Field(Field::Bottom)],
            Self::Linear => &[Pass::Linear(Field::Top), Pass::Linear(Field::Bottom)],
        }
    }

    /**
        Returns the number of output frames per input frame.
    */
    pub const fn frames_per_input(self) -> usize {
        self.passes().len()
    }

    /**
        Resolve a configured mode value.

        Missing or unrecognized values fall back to [`Mode::Discard`] and
        come back with the warning to report.
    */
    pub fn resolve(value: Option<&str>) -> (Self, Option<ConfigWarning>) {
        match value.map(str::parse::<Self>) {
            Some(Ok(mode)) => (mode, None),
            Some(Err(warning)) => (Self::Discard, Some(warning)),
            None => (Self::Discard, Some(ConfigWarning::Missing)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ConfigWarning;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard" => Ok(Self::Discard),
            "mean" => Ok(Self::Mean),
            "blend" | "average" | "combine-fields" => Ok(Self::Blend),
            "bob" | "progressive-scan" => Ok(Self::Bob),
            "linear" => Ok(Self::Linear),
            _ => Err(ConfigWarning::Unrecognized(s.to_owned())),
        }
    }
}

/**
    Output height relative to the input height.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputHeight {
    Half,
    Full,
}

impl OutputHeight {
    /**
        Returns the vertical shift applied to the input height.
    */
    pub const fn shift(self) -> u32 {
        match self {
            Self::Half => 1,
            Self::Full => 0,
        }
    }

    /**
        Apply to an input height.
    */
    pub const fn apply(self, height: u32) -> u32 {
        height >> self.shift()
    }
}

/**
    Non-fatal problem with the configured mode.
*/
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("no deinterlace mode provided, using \"discard\"")]
    Missing,
    #[error("no valid deinterlace mode provided ({0:?}), using \"discard\"")]
    Unrecognized(String),
}
