// Parameter passing across call paths
//
// Each receiver takes an `i64` by value and either reassigns the parameter
// or copies it into a local before incrementing. The caller never sees the
// change. Four call paths stand in for how reachable a callee is:
//
// - virtual: through a `&dyn ParamSink`
// - fn pointer: through a table of function pointers
// - generic: through a statically dispatched `S: ParamSink`
// - direct: plain free functions
//
// Within each path, `#[inline(never)]` receivers are the "open" variants
// and `#[inline]` receivers the "sealed" ones.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, trace};
use serde::Serialize;

use crate::driver::settle;

pub const NB_CALLS: i64 = 10_000_000;
pub const NB_LOOPS: u32 = 100;

pub const HEADER: &str = "Starting...          ; mx   ; mxn  ; mxf  ; mx_f ; mxf_f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallPath {
    Virtual,
    FnPointer,
    Generic,
    Direct,
}

impl CallPath {
    pub const ALL: [CallPath; 4] = [
        CallPath::Virtual,
        CallPath::FnPointer,
        CallPath::Generic,
        CallPath::Direct,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CallPath::Virtual => "virtual",
            CallPath::FnPointer => "fn pointer",
            CallPath::Generic => "generic",
            CallPath::Direct => "direct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variant {
    /// Reassigns the parameter.
    #[serde(rename = "mx")]
    Reassign,
    /// Copies to a local and increments the local.
    #[serde(rename = "mxn")]
    CopyLocal,
    /// `Reassign`, inlinable.
    #[serde(rename = "mxf")]
    SealedReassign,
    /// Immutable parameter copied to a local.
    #[serde(rename = "mx_f")]
    FrozenCopy,
    /// `FrozenCopy`, inlinable.
    #[serde(rename = "mxf_f")]
    SealedFrozenCopy,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Reassign,
        Variant::CopyLocal,
        Variant::SealedReassign,
        Variant::FrozenCopy,
        Variant::SealedFrozenCopy,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Variant::Reassign => "mx",
            Variant::CopyLocal => "mxn",
            Variant::SealedReassign => "mxf",
            Variant::FrozenCopy => "mx_f",
            Variant::SealedFrozenCopy => "mxf_f",
        }
    }

    fn pointer(self) -> fn(i64) -> i64 {
        match self {
            Variant::Reassign => direct::reassign,
            Variant::CopyLocal => direct::copy_local,
            Variant::SealedReassign => direct::sealed_reassign,
            Variant::FrozenCopy => direct::frozen_copy,
            Variant::SealedFrozenCopy => direct::sealed_frozen_copy,
        }
    }
}

/// Receivers return the incremented value so callers can check that only
/// the callee's copy changed.
pub trait ParamSink {
    fn reassign(&self, a: i64) -> i64;
    fn copy_local(&self, a: i64) -> i64;
    fn sealed_reassign(&self, a: i64) -> i64;
    fn frozen_copy(&self, a: i64) -> i64;
    fn sealed_frozen_copy(&self, a: i64) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sink;

impl ParamSink for Sink {
    #[inline(never)]
    fn reassign(&self, mut a: i64) -> i64 {
        a += 1;
        a
    }

    #[inline(never)]
    fn copy_local(&self, a: i64) -> i64 {
        let mut i = a;
        i += 1;
        i
    }

    #[inline]
    fn sealed_reassign(&self, mut a: i64) -> i64 {
        a += 1;
        a
    }

    #[inline(never)]
    fn frozen_copy(&self, a: i64) -> i64 {
        let mut i = a;
        i += 1;
        i
    }

    #[inline]
    fn sealed_frozen_copy(&self, a: i64) -> i64 {
        let mut i = a;
        i += 1;
        i
    }
}

pub mod direct {
    #[inline(never)]
    pub fn reassign(mut a: i64) -> i64 {
        a += 1;
        a
    }

    #[inline(never)]
    pub fn copy_local(a: i64) -> i64 {
        let mut i = a;
        i += 1;
        i
    }

    #[inline]
    pub fn sealed_reassign(mut a: i64) -> i64 {
        a += 1;
        a
    }

    #[inline(never)]
    pub fn frozen_copy(a: i64) -> i64 {
        let mut i = a;
        i += 1;
        i
    }

    #[inline]
    pub fn sealed_frozen_copy(a: i64) -> i64 {
        let mut i = a;
        i += 1;
        i
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassingConfig {
    pub calls: i64,
    pub loops: u32,
}

impl Default for PassingConfig {
    fn default() -> Self {
        PassingConfig {
            calls: NB_CALLS,
            loops: NB_LOOPS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PathTimings {
    pub path: CallPath,
    /// Milliseconds per variant, summed over every loop.
    pub millis: [u128; 5],
}

impl PathTimings {
    /// `results for <path> ; t0 ; t1 ; t2 ; t3 ; t4 ; `
    pub fn line(&self) -> String {
        let mut line = format!("results for {:<11}; ", self.path.name());
        for ms in self.millis {
            line.push_str(&format!("{ms} ; "));
        }
        line
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PassingReport {
    pub paths: Vec<PathTimings>,
    /// +1 per timed block whose counter ended positive, -1 otherwise.
    pub total: i64,
}

fn time_block(calls: i64, mut call: impl FnMut(i64) -> i64) -> (Duration, i64) {
    let start = Instant::now();
    let mut ctr: i64 = 0;
    for j in 0..calls {
        black_box(call(j));
        ctr = ctr.wrapping_add(j);
    }
    (start.elapsed(), ctr)
}

// The variant is matched once per block so the timed loop holds only the call.
fn time_sink<S: ParamSink + ?Sized>(sink: &S, variant: Variant, calls: i64) -> (Duration, i64) {
    match variant {
        Variant::Reassign => time_block(calls, |j| sink.reassign(j)),
        Variant::CopyLocal => time_block(calls, |j| sink.copy_local(j)),
        Variant::SealedReassign => time_block(calls, |j| sink.sealed_reassign(j)),
        Variant::FrozenCopy => time_block(calls, |j| sink.frozen_copy(j)),
        Variant::SealedFrozenCopy => time_block(calls, |j| sink.sealed_frozen_copy(j)),
    }
}

fn time_variant(path: CallPath, variant: Variant, calls: i64) -> (Duration, i64) {
    match path {
        CallPath::Virtual => {
            let sink: &dyn ParamSink = black_box(&Sink);
            time_sink(sink, variant, calls)
        }
        CallPath::FnPointer => {
            let f = black_box(variant.pointer());
            time_block(calls, f)
        }
        CallPath::Generic => time_sink(&Sink, variant, calls),
        CallPath::Direct => match variant {
            Variant::Reassign => time_block(calls, direct::reassign),
            Variant::CopyLocal => time_block(calls, direct::copy_local),
            Variant::SealedReassign => time_block(calls, direct::sealed_reassign),
            Variant::FrozenCopy => time_block(calls, direct::frozen_copy),
            Variant::SealedFrozenCopy => time_block(calls, direct::sealed_frozen_copy),
        },
    }
}

pub fn run_path(path: CallPath, config: &PassingConfig, total: &mut i64) -> PathTimings {
    let mut spent = [Duration::ZERO; 5];
    for k in 0..config.loops {
        for (slot, variant) in Variant::ALL.into_iter().enumerate() {
            let (elapsed, ctr) = time_variant(path, variant, config.calls);
            spent[slot] += elapsed;
            *total += if ctr > 0 { 1 } else { -1 };
        }
        trace!("{} loop {} done", path.name(), k);
    }
    let timings = PathTimings {
        path,
        millis: spent.map(|d| d.as_millis()),
    };
    debug!("{:?}", timings);
    timings
}

pub fn run_all(config: &PassingConfig) -> PassingReport {
    let mut total = 0;
    let mut paths = Vec::with_capacity(CallPath::ALL.len());
    for (n, path) in CallPath::ALL.into_iter().enumerate() {
        if n > 0 {
            settle();
        }
        paths.push(run_path(path, config, &mut total));
    }
    PassingReport { paths, total }
}
