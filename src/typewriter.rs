/// Per-step delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    pub typing: u64,
    pub deleting: u64,
    pub hold: u64,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            typing: 100,
            deleting: 50,
            hold: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types a word one character at a time, holds it, deletes it, then moves on
/// to the next word and wraps around.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    visible: usize,
    phase: Phase,
    pace: Pace,
}

impl Typewriter {
    pub fn new<I, S>(words: I, pace: Pace) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            word_index: 0,
            visible: 0,
            phase: Phase::Typing,
            pace,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    fn word(&self) -> &str {
        self.words
            .get(self.word_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn text(&self) -> String {
        self.word().chars().take(self.visible).collect()
    }

    /// How long to wait before the next `advance`. `None` once there is
    /// nothing to animate.
    pub fn delay_ms(&self) -> Option<u64> {
        if self.words.is_empty() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => self.pace.typing,
            Phase::Holding => self.pace.hold,
            Phase::Deleting => self.pace.deleting,
        })
    }

    pub fn advance(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.word().chars().count();
        match self.phase {
            Phase::Typing if self.visible < len => {
                self.visible += 1;
                if self.visible == len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Typing | Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting if self.visible > 0 => self.visible -= 1,
            Phase::Deleting => {
                self.word_index = (self.word_index + 1) % self.words.len();
                self.phase = Phase::Typing;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut t = Typewriter::new(["ab", "c"], Pace::default());
        assert_eq!(t.text(), "");
        assert_eq!(t.delay_ms(), Some(100));
        t.advance();
        assert_eq!(t.text(), "a");
        t.advance();
        assert_eq!(t.text(), "ab");
        assert_eq!(t.phase(), Phase::Holding);
        assert_eq!(t.delay_ms(), Some(2000));
        t.advance();
        assert_eq!(t.phase(), Phase::Deleting);
        assert_eq!(t.delay_ms(), Some(50));
        t.advance();
        assert_eq!(t.text(), "a");
        t.advance();
        assert_eq!(t.text(), "");
        t.advance();
        assert_eq!(t.word_index(), 1);
        assert_eq!(t.phase(), Phase::Typing);
        t.advance();
        assert_eq!(t.text(), "c");
        t.advance();
        t.advance();
        t.advance();
        assert_eq!(t.word_index(), 0);
    }

    #[test]
    fn test_multibyte_words() {
        let mut t = Typewriter::new(["héllo"], Pace::default());
        t.advance();
        t.advance();
        assert_eq!(t.text(), "hé");
    }

    #[test]
    fn test_empty_word_list_is_inert() {
        let mut t = Typewriter::new(Vec::<String>::new(), Pace::default());
        assert_eq!(t.delay_ms(), None);
        t.advance();
        assert_eq!(t.text(), "");
    }
}
