//! src/chunk_splitter.rs
use std::num::NonZeroUsize;

/// A contiguous piece of the document, owned so it can be moved to a worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    index: usize,
    offset: usize,
    text: String,
}

impl Fragment {
    pub fn new(index: usize, offset: usize, text: impl Into<String>) -> Self {
        Fragment {
            index,
            offset,
            text: text.into(),
        }
    }

    /// Position of this fragment in split order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset of the first character, counted in characters.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Cuts a document into fixed-length fragments by raw character offset.
///
/// The step is `len / fragments`, so an uneven division leaves one short
/// trailing fragment and the result may hold more fragments than requested.
/// Documents shorter than the fragment count are cut one character at a time.
/// Words that straddle a cut end up split across two fragments.
#[derive(Clone, Copy, Debug)]
pub struct ChunkSplitter {
    fragments: NonZeroUsize,
}

impl ChunkSplitter {
    pub fn new(fragments: NonZeroUsize) -> Self {
        ChunkSplitter { fragments }
    }

    /// Nominal fragment length for a document of `length` characters.
    pub fn nominal_length(&self, length: usize) -> usize {
        length / self.fragments.get()
    }

    #[tracing::instrument(
        name = "Split document",
        skip(document),
        fields(length = tracing::field::Empty)
    )]
    pub fn split(&self, document: &str) -> Vec<Fragment> {
        let length = document.chars().count();
        tracing::Span::current().record("length", length);
        let step = self.nominal_length(length).max(1);

        let starts: Vec<usize> = document
            .char_indices()
            .step_by(step)
            .map(|(byte, _)| byte)
            .collect();

        let fragments: Vec<Fragment> = starts
            .iter()
            .enumerate()
            .map(|(index, &start)| {
                let end = starts.get(index + 1).copied().unwrap_or(document.len());
                Fragment::new(index, index * step, &document[start..end])
            })
            .collect();

        tracing::debug!(
            step,
            requested = self.fragments.get(),
            produced = fragments.len(),
            "Split document into fragments"
        );
        fragments
    }
}
