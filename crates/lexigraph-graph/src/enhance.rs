//! Text enhancement via bridge words.

use crate::graph::WordGraph;
use lexigraph_core::tokenize;

impl WordGraph {
    /// Rewrites `text` by inserting every bridge word between each pair of
    /// adjacent words.
    ///
    /// The input is normalized first, so the output is lowercase and
    /// space-separated. Pairs involving unknown words get no insertions.
    pub fn enhance(&self, text: &str) -> String {
        let words: Vec<String> = tokenize(text).collect();
        let mut output: Vec<String> = Vec::with_capacity(words.len() * 2);

        for pair in words.windows(2) {
            output.push(pair[0].clone());
            if let Ok(found) = self.bridge_words(&pair[0], &pair[1]) {
                output.extend(found.bridges);
            }
        }

        if let Some(last) = words.last() {
            output.push(last.clone());
        }

        output.join(" ")
    }
}
