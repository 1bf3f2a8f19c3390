//! Plans and renders the if, loop and plain blocks of a method body.

use crate::{
    snippets::{
        conditions::{Complexity, Condition},
        error::SynthError,
        variables::Variable,
    },
    utils::RandomChoice,
};
use rand::{seq::SliceRandom, Rng};
use std::{collections::VecDeque, iter::repeat};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────────
// Block definitions
// ────────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockKind {
    If,
    Loop,
    /// Bare statement used to host calls no if/loop block could take
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoopKind {
    /// `for (int i = 0; i < k; i++)`
    Counted,
    /// `while (counter < k)` over the body-wide counter
    Counter,
}

/// Planning token, consumed once when the body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlBlock {
    pub kind: BlockKind,
    pub has_call: bool,
}

/// How many of the pending calls each kind of block hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallAllocation {
    pub in_if: usize,
    pub in_loop: usize,
    pub in_plain: usize,
}

/// Renders blocks for a single method body. The `while` counter is declared by the first counter
/// loop and only reset by the following ones, so a composer must not be shared across bodies.
pub struct BlockComposer<'a> {
    scope: &'a [Variable],
    complexity: Complexity,
    counter_declared: bool,
}

// ────────────────────────────────────────────────────────────────────────────────
// Allocation
// ────────────────────────────────────────────────────────────────────────────────

impl ControlBlock {
    pub const fn new(kind: BlockKind, has_call: bool) -> Self {
        Self { kind, has_call }
    }
}

impl CallAllocation {
    /// Splits `call_count` calls proportionally to the number of if and loop blocks, rounding
    /// each share up. When both shares round up, the sum overshoots by exactly one; that call is
    /// taken back from the share that rounded up the most (the loops on a tie), so the three
    /// shares always add up to `call_count`.
    pub fn new(if_count: usize, loop_count: usize, call_count: usize) -> Self {
        let block_count = if_count + loop_count;
        if block_count == 0 || call_count == 0 {
            return Self { in_if: 0, in_loop: 0, in_plain: call_count };
        }

        let (mut in_if, if_remainder) = ceil_share(if_count, call_count, block_count);
        let (mut in_loop, loop_remainder) = ceil_share(loop_count, call_count, block_count);

        let surplus = (in_if + in_loop).saturating_sub(call_count);
        if surplus > 0 {
            if if_remainder < loop_remainder {
                in_if -= surplus;
            } else {
                in_loop -= surplus;
            }
        }

        Self { in_if, in_loop, in_plain: call_count - in_if - in_loop }
    }

    pub const fn total(&self) -> usize {
        self.in_if + self.in_loop + self.in_plain
    }

    /// Planning tokens in kind order. When calls outnumber blocks, the call-carrying tokens
    /// exceed the requested block counts so that every call has a host.
    pub fn plan(&self, if_count: usize, loop_count: usize) -> Vec<ControlBlock> {
        let mut blocks = Vec::new();

        blocks.extend(repeat(ControlBlock::new(BlockKind::If, true)).take(self.in_if));
        blocks.extend(
            repeat(ControlBlock::new(BlockKind::If, false)).take(if_count.saturating_sub(self.in_if)),
        );
        blocks.extend(repeat(ControlBlock::new(BlockKind::Loop, true)).take(self.in_loop));
        blocks.extend(
            repeat(ControlBlock::new(BlockKind::Loop, false))
                .take(loop_count.saturating_sub(self.in_loop)),
        );
        blocks.extend(repeat(ControlBlock::new(BlockKind::Plain, true)).take(self.in_plain));

        blocks
    }
}

/// `ceil(count * calls / blocks)` in exact integer arithmetic, along with the remainder.
fn ceil_share(count: usize, calls: usize, blocks: usize) -> (usize, usize) {
    let exact = count * calls;
    (exact.div_ceil(blocks), exact % blocks)
}

// ────────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────────

impl<'a> BlockComposer<'a> {
    /// `scope` holds the variables conditions and fallback prints may reference.
    pub fn new(scope: &'a [Variable], complexity: Complexity) -> Self {
        Self { scope, complexity, counter_declared: false }
    }

    /// Emits `if_count` if-blocks and `loop_count` loops in random order, embedding the pending
    /// calls front to back. Calls that were not consumed stay in `pending`.
    pub fn compose(
        &mut self,
        random: &mut impl Rng,
        pending: &mut VecDeque<String>,
        if_count: usize,
        loop_count: usize,
    ) -> Result<Vec<String>, SynthError> {
        let allocation = CallAllocation::new(if_count, loop_count, pending.len());
        debug!(if_count, loop_count, calls = pending.len(), ?allocation, "allocated calls");

        let mut blocks = allocation.plan(if_count, loop_count);
        blocks.shuffle(random);

        let mut statements = Vec::with_capacity(blocks.len());
        for block in blocks {
            let call = if block.has_call { pending.pop_front() } else { None };

            match block.kind {
                BlockKind::If => statements.push(self.if_block(random, call)?),
                BlockKind::Loop => statements.push(self.random_loop(random, call)),
                BlockKind::Plain => {
                    if let Some(call) = call {
                        statements.push(format!("\t{call}"));
                    }
                }
            }
        }

        Ok(statements)
    }

    /// An always-true if-block around `call`, or around a print of a random variable.
    pub fn if_block(
        &self,
        random: &mut impl Rng,
        call: Option<String>,
    ) -> Result<String, SynthError> {
        let condition = Condition::random(random, self.scope, self.complexity, true)?;
        let statement = match call {
            Some(call) => call,
            None => format!("System.out.println({});", random.choice(self.scope).name),
        };

        Ok(format!("\tif ({condition}) {{\n\t\t{statement}\n\t}}"))
    }

    pub fn random_loop(&mut self, random: &mut impl Rng, call: Option<String>) -> String {
        let kind = *random.choice(&[LoopKind::Counted, LoopKind::Counter]);
        let bound = random.random_range(1..=5);
        self.loop_block(kind, bound, call)
    }

    /// A loop running `bound` times around `call`, or around a print of the loop variable.
    pub fn loop_block(&mut self, kind: LoopKind, bound: usize, call: Option<String>) -> String {
        match kind {
            LoopKind::Counted => {
                let statement = call.unwrap_or_else(|| "System.out.println(i);".to_string());
                format!("\tfor (int i = 0; i < {bound}; i++) {{\n\t\t{statement}\n\t}}")
            }
            LoopKind::Counter => {
                let statement = call.unwrap_or_else(|| "System.out.println(counter);".to_string());
                let init = if self.counter_declared { "counter = 0;" } else { "int counter = 0;" };
                self.counter_declared = true;

                format!(
                    "\t{init}\n\twhile (counter < {bound}) {{\n\t\t{statement}\n\t\tcounter++;\n\t}}"
                )
            }
        }
    }
}
