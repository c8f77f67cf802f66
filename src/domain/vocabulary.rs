use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Display colour attached to tags and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Blue,
    Purple,
    Green,
    Pink,
    Red,
    Teal,
    Amber,
    Indigo,
    Orange,
    Cyan,
    Violet,
    Gray,
}

/// Column a card lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Text to Speech")]
    TextToSpeech,
    #[serde(rename = "Speech to Text")]
    SpeechToText,
    #[serde(rename = "LLMs")]
    Llms,
    #[serde(rename = "Voice Assistants")]
    VoiceAssistants,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in board column order
    pub const ALL: [Category; 5] = [
        Self::TextToSpeech,
        Self::SpeechToText,
        Self::Llms,
        Self::VoiceAssistants,
        Self::Other,
    ];

    /// Returns the column heading, also used as the stored form
    pub fn label(&self) -> &'static str {
        match self {
            Self::TextToSpeech => "Text to Speech",
            Self::SpeechToText => "Speech to Text",
            Self::Llms => "LLMs",
            Self::VoiceAssistants => "Voice Assistants",
            Self::Other => "Other",
        }
    }

    /// Returns the colour of the column header
    pub fn hue(&self) -> Hue {
        match self {
            Self::TextToSpeech => Hue::Purple,
            Self::SpeechToText => Hue::Blue,
            Self::Llms => Hue::Green,
            Self::VoiceAssistants => Hue::Amber,
            Self::Other => Hue::Gray,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = KanbanError;

    /// Accepts the label in any case, or its dashed form (`text-to-speech`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|category| normalize(category.label()) == wanted)
            .ok_or_else(|| KanbanError::InvalidCategory(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], " ")
}

/// Technology tag.
///
/// Strings outside the known vocabulary are kept as [`Tag::Unrecognized`]
/// so stored data survives a round trip; they render with a neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Stt,
    Tts,
    Multilingual,
    Emotion,
    GpuRequired,
    OpenSource,
    Commercial,
    RealTime,
    Batch,
    OnPremise,
    Cloud,
    Unrecognized(String),
}

impl Tag {
    /// The known tag vocabulary, in picker order
    pub const KNOWN: [Tag; 11] = [
        Self::Stt,
        Self::Tts,
        Self::Multilingual,
        Self::Emotion,
        Self::GpuRequired,
        Self::OpenSource,
        Self::Commercial,
        Self::RealTime,
        Self::Batch,
        Self::OnPremise,
        Self::Cloud,
    ];

    /// Returns the display label; unrecognized tags show their raw text
    pub fn label(&self) -> &str {
        match self {
            Self::Stt => "STT",
            Self::Tts => "TTS",
            Self::Multilingual => "Multilingual",
            Self::Emotion => "Emotion",
            Self::GpuRequired => "GPU-required",
            Self::OpenSource => "Open-source",
            Self::Commercial => "Commercial",
            Self::RealTime => "Real-time",
            Self::Batch => "Batch",
            Self::OnPremise => "On-premise",
            Self::Cloud => "Cloud",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns the chip colour; unrecognized tags are gray
    pub fn hue(&self) -> Hue {
        match self {
            Self::Stt => Hue::Blue,
            Self::Tts => Hue::Purple,
            Self::Multilingual => Hue::Green,
            Self::Emotion => Hue::Pink,
            Self::GpuRequired => Hue::Red,
            Self::OpenSource => Hue::Teal,
            Self::Commercial => Hue::Amber,
            Self::RealTime => Hue::Indigo,
            Self::Batch => Hue::Orange,
            Self::OnPremise => Hue::Cyan,
            Self::Cloud => Hue::Violet,
            Self::Unrecognized(_) => Hue::Gray,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Tag {
    fn from(raw: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|tag| tag.label() == raw)
            .unwrap_or(Self::Unrecognized(raw))
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl FromStr for Tag {
    type Err = std::convert::Infallible;

    /// Matches known tags case-insensitively; anything else is kept verbatim
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(Self::KNOWN
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Unrecognized(trimmed.to_string())))
    }
}
