//! Reciter enumeration and audio addressing.
//!
//! Reciters are static configuration: a short fixed list, never loaded from
//! any source. Audio for a verse is addressed deterministically from the
//! reciter, chapter and verse identifiers.

/// Default host serving per-verse recitation files.
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://quranaudio.pages.dev";

/// An audio narrator identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reciter {
    pub id: u32,
    pub name: &'static str,
}

/// All reciters in display order. The first entry is the default.
pub const RECITERS: [Reciter; 3] = [
    Reciter {
        id: 1,
        name: "مشاري بن راشد العفاسي",
    },
    Reciter {
        id: 2,
        name: "أبو بكر الشاطري",
    },
    Reciter {
        id: 3,
        name: "ناصر القطامي",
    },
];

impl Reciter {
    /// Looks a reciter up by id.
    #[must_use]
    pub fn by_id(id: u32) -> Option<Self> {
        RECITERS.iter().copied().find(|r| r.id == id)
    }

    /// Builds the audio URL for one verse.
    ///
    /// # Examples
    ///
    /// ```
    /// use ayah::domain::Reciter;
    ///
    /// let reciter = Reciter::default();
    /// assert_eq!(
    ///     reciter.audio_url("https://quranaudio.pages.dev/", 1, 7),
    ///     "https://quranaudio.pages.dev/1/1_7.mp3"
    /// );
    /// ```
    #[must_use]
    pub fn audio_url(&self, base_url: &str, chapter_id: u32, verse_id: u32) -> String {
        let base = base_url.trim_end_matches('/');
        format!("{base}/{}/{chapter_id}_{verse_id}.mp3", self.id)
    }
}

impl Default for Reciter {
    fn default() -> Self {
        RECITERS[0]
    }
}
