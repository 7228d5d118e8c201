//! Sorting step tracer.
//!
//! Each strategy mutates a private copy of the input and appends a snapshot
//! at every observable point: before and after comparisons, after swaps and
//! shifts, and whenever an index is finalized into the sorted set. The
//! emission points are part of the contract -- a replay of the trace must
//! show exactly the intermediate states a student would expect from the
//! textbook formulation of each algorithm.
//!
//! The `sorted` list keeps finalization order (bubble prepends because it
//! finalizes from the right, the others append); membership is what the
//! monotonicity invariant is about.

use smallvec::SmallVec;

use stepviz_core::{SortAlgorithm, SortStep};

/// Trace generator for the sorting family.
///
/// Stateless: every call builds its own [`SortRun`] accumulator, so two
/// calls with the same inputs return snapshot-for-snapshot identical traces.
pub struct SortStepTracer;

impl SortStepTracer {
    /// Resolves `algorithm_id` (unknown ids fall back to bubble sort) and
    /// traces it over a copy of `values`. The caller's slice is never
    /// mutated.
    pub fn get_steps(algorithm_id: &str, values: &[u64]) -> Vec<SortStep> {
        Self::run(SortAlgorithm::from_id(algorithm_id), values)
    }

    /// Traces an already-resolved strategy.
    pub fn run(algorithm: SortAlgorithm, values: &[u64]) -> Vec<SortStep> {
        let mut run = SortRun::new(values);
        match algorithm {
            SortAlgorithm::Bubble => run.bubble(),
            SortAlgorithm::Selection => run.selection(),
            SortAlgorithm::Insertion => run.insertion(),
            SortAlgorithm::Merge => run.merge(),
            SortAlgorithm::Quick => run.quick(),
        }
        run.steps
    }
}

/// Per-call working state: the evolving array, the finalized-index list,
/// and the trace being accumulated.
struct SortRun {
    arr: Vec<u64>,
    sorted: Vec<usize>,
    steps: Vec<SortStep>,
}

impl SortRun {
    fn new(values: &[u64]) -> Self {
        SortRun {
            arr: values.to_vec(),
            sorted: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Copy-on-emit: the snapshot owns clones of the array and sorted list
    /// as of this instant.
    fn emit(&mut self, comparing: &[usize], current: &[usize]) {
        self.steps.push(SortStep {
            values: self.arr.clone(),
            comparing: SmallVec::from_slice(comparing),
            sorted: self.sorted.clone(),
            current: SmallVec::from_slice(current),
        });
    }

    fn bubble(&mut self) {
        let n = self.arr.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                self.emit(&[j, j + 1], &[]);
                if self.arr[j] > self.arr[j + 1] {
                    self.arr.swap(j, j + 1);
                    self.emit(&[j, j + 1], &[]);
                }
            }
            // The pass bubbled the largest unsorted value to the tail.
            self.sorted.insert(0, n - i - 1);
            self.emit(&[], &[]);
        }
        // Index 0 never needs a pass of its own.
        if n > 0 {
            self.sorted.insert(0, 0);
        }
        self.emit(&[], &[]);
    }

    fn selection(&mut self) {
        let n = self.arr.len();
        for i in 0..n.saturating_sub(1) {
            let mut min_idx = i;
            self.emit(&[i], &[min_idx]);

            for j in i + 1..n {
                self.emit(&[i, j], &[min_idx]);
                if self.arr[j] < self.arr[min_idx] {
                    min_idx = j;
                    self.emit(&[i, j], &[min_idx]);
                }
            }

            if min_idx != i {
                self.arr.swap(i, min_idx);
                self.emit(&[i, min_idx], &[]);
            }

            self.sorted.push(i);
            self.emit(&[], &[]);
        }
        if n > 0 {
            self.sorted.push(n - 1);
        }
        self.emit(&[], &[]);
    }

    fn insertion(&mut self) {
        let n = self.arr.len();
        if n > 0 {
            self.sorted.push(0);
        }
        self.emit(&[], &[]);

        for i in 1..n {
            let key = self.arr[i];
            // j is the open slot the key will land in.
            let mut j = i;
            self.emit(&[i], &[i]);

            while j > 0 && self.arr[j - 1] > key {
                self.emit(&[j - 1, j], &[]);
                self.arr[j] = self.arr[j - 1];
                self.emit(&[j - 1, j], &[]);
                j -= 1;
            }

            self.arr[j] = key;
            self.sorted.push(i);
            self.emit(&[], &[]);
        }
    }

    fn merge(&mut self) {
        let n = self.arr.len();
        if n > 1 {
            self.merge_sort(0, n - 1);
        }
    }

    fn merge_sort(&mut self, left: usize, right: usize) {
        if left < right {
            let mid = (left + right) / 2;
            self.merge_sort(left, mid);
            self.merge_sort(mid + 1, right);
            self.merge_halves(left, mid, right);
        }
    }

    fn merge_halves(&mut self, left: usize, mid: usize, right: usize) {
        let left_half: Vec<u64> = self.arr[left..=mid].to_vec();
        let right_half: Vec<u64> = self.arr[mid + 1..=right].to_vec();

        let (mut i, mut j, mut k) = (0, 0, left);

        while i < left_half.len() && j < right_half.len() {
            self.emit(&[left + i, mid + 1 + j], &[]);
            if left_half[i] <= right_half[j] {
                self.arr[k] = left_half[i];
                i += 1;
            } else {
                self.arr[k] = right_half[j];
                j += 1;
            }
            k += 1;
            self.emit(&[], &[]);
        }

        // Drain whichever half still has elements.
        while i < left_half.len() {
            self.arr[k] = left_half[i];
            i += 1;
            k += 1;
            self.emit(&[], &[]);
        }
        while j < right_half.len() {
            self.arr[k] = right_half[j];
            j += 1;
            k += 1;
            self.emit(&[], &[]);
        }

        for idx in left..=right {
            if !self.sorted.contains(&idx) {
                self.sorted.push(idx);
            }
        }
        self.emit(&[], &[]);
    }

    fn quick(&mut self) {
        let n = self.arr.len() as isize;
        self.quick_sort(0, n - 1);
    }

    fn quick_sort(&mut self, low: isize, high: isize) {
        if low < high {
            let pivot_idx = self.partition(low as usize, high as usize);
            self.sorted.push(pivot_idx);
            self.quick_sort(low, pivot_idx as isize - 1);
            self.quick_sort(pivot_idx as isize + 1, high);
        } else if low == high && !self.sorted.contains(&(low as usize)) {
            // Base-case leaf the swap walk never touched.
            self.sorted.push(low as usize);
            self.emit(&[], &[]);
        }
    }

    /// Lomuto partition, pivot fixed as the last element of the range.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.arr[high];
        let mut i = low as isize - 1;

        self.emit(&[], &[high]);

        for j in low..high {
            self.emit(&[j, high], &[high]);
            if self.arr[j] < pivot {
                i += 1;
                self.arr.swap(i as usize, j);
                self.emit(&[i as usize, j], &[high]);
            }
        }

        let dest = (i + 1) as usize;
        self.arr.swap(dest, high);
        self.emit(&[dest, high], &[]);
        dest
    }
}
