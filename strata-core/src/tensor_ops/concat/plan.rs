use std::ops::Range;

/// One contiguous run of elements shared by input `input` and the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopySpan {
    /// Index of the input in the list the plan was built from.
    pub input: usize,
    /// Number of elements in the run.
    pub len: usize,
    /// Where the run starts in the input's buffer.
    pub input_offset: usize,
    /// Where the run starts in the output's buffer.
    pub output_offset: usize,
}

/// A single copy: `src` range of the source buffer into `dst` range of the
/// destination buffer. Both ranges have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRange {
    pub input: usize,
    pub src: Range<usize>,
    pub dst: Range<usize>,
}

/// The ordered list of [CopySpan]s that moves every element of every input
/// to its place in the output.
///
/// [CopyPlan::forward_copies] and [CopyPlan::backward_copies] walk the same
/// spans with source and destination swapped, so a backward pass always
/// undoes exactly what the forward pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    spans: Vec<CopySpan>,
}

impl CopyPlan {
    pub fn push(&mut self, span: CopySpan) {
        self.spans.push(span);
    }

    pub fn spans(&self) -> &[CopySpan] {
        &self.spans
    }

    /// Total number of elements moved by the plan.
    pub fn num_elements(&self) -> usize {
        self.spans.iter().map(|s| s.len).sum()
    }

    /// Copies from input buffers (`src`) into the output buffer (`dst`).
    pub fn forward_copies(&self) -> impl Iterator<Item = CopyRange> + '_ {
        self.spans.iter().map(|s| CopyRange {
            input: s.input,
            src: s.input_offset..s.input_offset + s.len,
            dst: s.output_offset..s.output_offset + s.len,
        })
    }

    /// Copies from the output buffer (`src`) into input buffers (`dst`).
    pub fn backward_copies(&self) -> impl Iterator<Item = CopyRange> + '_ {
        self.forward_copies().map(|c| CopyRange {
            input: c.input,
            src: c.dst,
            dst: c.src,
        })
    }
}

impl FromIterator<CopySpan> for CopyPlan {
    fn from_iter<I: IntoIterator<Item = CopySpan>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}
