//! Text and similarity algorithms shared by the gate, clusterer and scorer.

pub mod features;
pub mod lexicon;
pub mod similarity;
pub mod tokenize;
