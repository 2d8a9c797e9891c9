//! Built-in voice table and output file naming.
//!
//! Friendly names and their archive keys come from the KittenTTS release
//! (`voice_aliases` in the model's `config.json`). Table order is the order
//! voices are processed and reported.

/// A friendly voice name paired with the archive key holding its embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceAlias {
    /// Name used to derive the output file name.
    pub name: &'static str,
    /// Key of the embedding array inside the archive.
    pub key: &'static str,
}

/// Built-in voices, in processing order.
pub const VOICE_ALIASES: &[VoiceAlias] = &[
    VoiceAlias { name: "bella", key: "expr-voice-2-f" },
    VoiceAlias { name: "jasper", key: "expr-voice-2-m" },
    VoiceAlias { name: "luna", key: "expr-voice-3-f" },
    VoiceAlias { name: "bruno", key: "expr-voice-3-m" },
    VoiceAlias { name: "rosie", key: "expr-voice-4-f" },
    VoiceAlias { name: "hugo", key: "expr-voice-4-m" },
    VoiceAlias { name: "kiki", key: "expr-voice-5-f" },
    VoiceAlias { name: "leo", key: "expr-voice-5-m" },
];

/// File name prefix shared by all extracted voices.
pub const VOICE_FILE_PREFIX: &str = "kitten";

/// Deterministic output file name for a voice, e.g. `kitten-bella.bin`.
pub fn voice_file_name(name: &str) -> String {
    format!("{VOICE_FILE_PREFIX}-{name}.bin")
}
