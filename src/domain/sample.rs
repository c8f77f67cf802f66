use crate::domain::{
    card::{Card, CardId},
    vocabulary::{Category, Tag},
};
use chrono::Utc;

/// Cards seeded into an empty or unreadable board
pub fn sample_cards() -> Vec<Card> {
    let now = Utc::now();
    let card = |name: &str, description: &str, tags: Vec<Tag>, category: Category, notes: &str| Card {
        id: CardId::generate(),
        name: name.to_string(),
        description: description.to_string(),
        tags,
        category,
        notes: Some(notes.to_string()),
        created_at: now,
        updated_at: now,
    };

    vec![
        card(
            "OpenAI Whisper",
            "State-of-the-art speech recognition model with multilingual capabilities",
            vec![Tag::Stt, Tag::Multilingual, Tag::GpuRequired, Tag::OpenSource],
            Category::SpeechToText,
            "Excellent accuracy but requires significant GPU resources for real-time processing",
        ),
        card(
            "ESPnet",
            "End-to-End Speech Processing Toolkit with various models",
            vec![Tag::Stt, Tag::Tts, Tag::OpenSource, Tag::Batch],
            Category::SpeechToText,
            "Documentation is complex, working on setting up the environment",
        ),
        card(
            "ElevenLabs",
            "High-quality, realistic voice synthesis with emotion control",
            vec![Tag::Tts, Tag::Emotion, Tag::Commercial, Tag::Cloud],
            Category::TextToSpeech,
            "Pricing is a concern for large-scale usage",
        ),
        card(
            "Mozilla DeepSpeech",
            "Open-source speech-to-text engine using TensorFlow",
            vec![Tag::Stt, Tag::OpenSource, Tag::OnPremise],
            Category::SpeechToText,
            "Performance issues with non-English languages",
        ),
        card(
            "Coqui TTS",
            "Deep learning toolkit for Text-to-Speech with multiple voices",
            vec![Tag::Tts, Tag::OpenSource, Tag::GpuRequired],
            Category::TextToSpeech,
            "Good quality for an open-source solution, but requires fine-tuning",
        ),
        card(
            "GPT-4",
            "Large language model with advanced reasoning capabilities",
            vec![Tag::OpenSource, Tag::GpuRequired, Tag::Cloud],
            Category::Llms,
            "Excellent for text generation and understanding",
        ),
        card(
            "Amazon Alexa",
            "Voice assistant platform with custom skill development",
            vec![Tag::Commercial, Tag::Cloud, Tag::RealTime],
            Category::VoiceAssistants,
            "Good ecosystem but requires AWS integration",
        ),
    ]
}
