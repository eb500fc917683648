use fst::Set;

/// Exact-membership word set, stored as an in-memory FST.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Build from already normalized words; order and duplicates don't matter.
    pub fn from_words(words: &[String]) -> Result<Self, fst::Error> {
        let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.dedup();

        let set = Set::from_iter(sorted)?;
        Ok(Self { set })
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Trim and lowercase each entry, dropping blanks. Keeps the input order.
pub fn normalize<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
