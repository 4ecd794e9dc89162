//! Seeded demo outline generation.
//!
//! Builds a reproducible English-course outline in memory. Used by the GUI's
//! "Demo Outline" button and by the `lectree-outlinegen` binary, and handy in
//! tests that need a nontrivial tree without fixture files.

use crate::outline::{Outline, OutlineNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_MAX_DEPTH: usize = 3;
const DEFAULT_MAX_CHILDREN: usize = 5;

const UNIT_TOPICS: &[&str] = &[
    "Grammar Foundations",
    "Everyday Conversation",
    "Academic Writing",
    "Listening & Pronunciation",
    "Vocabulary Building",
    "Exam Preparation",
    "Business English",
    "Reading Comprehension",
];

const LECTURE_TOPICS: &[&str] = &[
    "Present Simple vs Present Continuous",
    "Past Tenses Overview",
    "Conditionals in Context",
    "Phrasal Verbs: Travel",
    "Phrasal Verbs: Work",
    "Modal Verbs of Obligation",
    "Articles and Determiners",
    "Reported Speech",
    "Linking Words and Cohesion",
    "Describing Trends",
    "Small Talk Strategies",
    "Formal Email Writing",
    "Listening for Gist",
    "Word Stress Patterns",
    "Collocations with Make and Do",
    "Essay Structure Basics",
];

/// Builds seeded demo outlines with a bounded shape.
pub struct DemoOutlineBuilder {
    max_depth: usize,
    max_children: usize,
    seed: u64,
}

impl DemoOutlineBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_children: DEFAULT_MAX_CHILDREN,
            seed: 42, // Default seed for reproducibility
        }
    }

    pub fn with_config(max_depth: usize, max_children: usize, seed: u64) -> Self {
        Self {
            max_depth: max_depth.max(1),
            max_children: max_children.max(1),
            seed,
        }
    }

    /// Generates the outline. The same builder configuration always produces
    /// the same tree.
    pub fn build(&self) -> Outline {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let num_roots = rng.gen_range(2..=4);
        let mut next_id = 1u64;
        let mut roots = Vec::new();

        for position in 0..num_roots {
            let numbering = (position + 1).to_string();
            roots.push(self.generate_node(&mut rng, 1, position, &numbering, &mut next_id));
        }

        Outline {
            title: Some("Demo English Course".to_string()),
            roots,
        }
    }

    fn generate_node(
        &self,
        rng: &mut StdRng,
        depth: usize,
        position: usize,
        numbering: &str,
        next_id: &mut u64,
    ) -> OutlineNode {
        let id = next_id.to_string();
        *next_id += 1;

        // Leaves appear at the depth limit, and occasionally earlier
        let is_leaf = depth >= self.max_depth || (depth > 1 && rng.gen_bool(0.25));

        let title = if is_leaf {
            LECTURE_TOPICS[rng.gen_range(0..LECTURE_TOPICS.len())].to_string()
        } else {
            UNIT_TOPICS[rng.gen_range(0..UNIT_TOPICS.len())].to_string()
        };

        // Most nodes carry a numbering label; some rely on the fallbacks
        let numbering_label = if rng.gen_bool(0.8) {
            Some(numbering.to_string())
        } else {
            None
        };

        let children = if is_leaf {
            Vec::new()
        } else {
            let span = self.max_children.max(2);
            let num_children = rng.gen_range(2..=span);
            (0..num_children)
                .map(|child_position| {
                    let child_numbering = format!("{}.{}", numbering, child_position + 1);
                    self.generate_node(rng, depth + 1, child_position, &child_numbering, next_id)
                })
                .collect()
        };

        OutlineNode {
            id,
            title,
            numbering_label,
            order_index: Some(position as i64 + 1),
            children,
        }
    }
}

impl Default for DemoOutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
