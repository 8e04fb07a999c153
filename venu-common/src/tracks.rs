/// Static display entry in the "current rotation" grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub image: &'static str,
}

impl Track {
    /// Image alt text, e.g. "Taka Taka by Skrillex".
    pub fn alt_text(&self) -> String {
        format!("{} by {}", self.title, self.artist)
    }

    /// Now-playing line, e.g. "Skrillex — Taka Taka".
    pub fn now_playing_label(&self) -> String {
        format!("{} — {}", self.artist, self.title)
    }
}

pub const CURRENT_ROTATION: [Track; 4] = [
    Track {
        title: "Taka Taka",
        artist: "Skrillex",
        image: "https://i1.sndcdn.com/artworks-fRunA1Jr0ensBTzz-8qGcUQ-t500x500.jpg",
    },
    Track {
        title: "Sunsleeper",
        artist: "Barry Can't Swim",
        image: "https://f4.bcbits.com/img/a0459176684_65",
    },
    Track {
        title: "System",
        artist: "Salute",
        image: "https://f4.bcbits.com/img/a3793060197_65",
    },
    Track {
        title: "Forbidden Feelings",
        artist: "Nia Archives",
        image: "https://i1.sndcdn.com/artworks-uSus4Jxo8AcM-0-t500x500.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_order() {
        let titles: Vec<&str> = CURRENT_ROTATION.iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec!["Taka Taka", "Sunsleeper", "System", "Forbidden Feelings"]
        );
    }

    #[test]
    fn test_labels() {
        let track = CURRENT_ROTATION[0];
        assert_eq!(track.alt_text(), "Taka Taka by Skrillex");
        assert_eq!(track.now_playing_label(), "Skrillex — Taka Taka");
    }
}
