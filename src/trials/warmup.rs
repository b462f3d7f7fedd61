// ============================================================================
// Warm-up pass
// ============================================================================
//
// Touches every idiom once in a single long-running function before the
// timed trials: containers of both kinds and all capacities, both
// concatenation styles, every buffer constructor and the accessors.

use std::hint::black_box;
use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::buffer::LockedBuffer;
use crate::context::TrialContext;
use crate::error::{BenchError, BenchResult};
use crate::fixtures::{Fixtures, LINE_26, LINE_36, LINE_64, MAX_LOOP_2, MAX_LOOP_4};
use crate::store::{LockedTable, PlainMap, Store};

const CONCAT_ROUNDS: i64 = 20_000;
const BUFFER_ROUNDS: usize = 80_000;

/// Counters printed at the end of each warm-up section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarmupReport {
    /// Rounds in which each pair of lookup transcripts matched.
    pub matches: [i64; 6],
    pub s1_len: usize,
    pub s2_len: usize,
    pub l: i64,
    pub m: i64,
    pub q: i64,
}

fn lookup_into<S: Store>(
    store: &S,
    fixtures: &Fixtures,
    transcript: &LockedBuffer,
    key_index: usize,
) -> BenchResult<()> {
    let key = &fixtures.keys()[key_index];
    let value = store.lookup(key).ok_or_else(|| BenchError::MissingKey {
        key: key.to_string(),
        container: S::KIND.name(),
    })?;
    value.with_text(|text| transcript.append(text));
    Ok(())
}

fn warm_containers(fixtures: &Fixtures, out: &mut dyn Write) -> BenchResult<[i64; 6]> {
    let mut matches = [0; 6];
    for k in 0..MAX_LOOP_4 {
        if k % 200 == 199 {
            writeln!(out, "  k = {k}")?;
        }
        let mut map_def = PlainMap::with_capacity(None);
        let mut table_def = LockedTable::with_capacity(None);
        let mut map_101 = PlainMap::with_capacity(Some(101));
        let mut table_101 = LockedTable::with_capacity(Some(128));
        let mut map_1001 = PlainMap::with_capacity(Some(1001));
        let mut table_1001 = LockedTable::with_capacity(Some(1024));
        for key in fixtures.keys() {
            let value = fixtures.shared();
            map_def.put(*key, Arc::clone(value));
            table_def.put(*key, Arc::clone(value));
            map_101.put(*key, Arc::clone(value));
            table_101.put(*key, Arc::clone(value));
            map_1001.put(*key, Arc::clone(value));
            table_1001.put(*key, Arc::clone(value));
        }

        let transcripts: [LockedBuffer; 6] =
            std::array::from_fn(|_| LockedBuffer::with_capacity(128));
        for j in 0..fixtures.keys().len() {
            lookup_into(&map_def, fixtures, &transcripts[0], j)?;
            lookup_into(&table_def, fixtures, &transcripts[1], j)?;
            lookup_into(&map_101, fixtures, &transcripts[2], j)?;
            lookup_into(&table_101, fixtures, &transcripts[3], j)?;
            lookup_into(&map_1001, fixtures, &transcripts[4], j)?;
            lookup_into(&table_1001, fixtures, &transcripts[5], j)?;
        }

        let texts: Vec<String> = transcripts.iter().map(LockedBuffer::to_string).collect();
        for (slot, (a, b)) in [(0, 2), (1, 3), (2, 4), (3, 5), (4, 0), (5, 1)]
            .into_iter()
            .enumerate()
        {
            if texts[a] == texts[b] {
                matches[slot] += 1;
            }
        }
        map_def.clear();
        table_def.clear();
    }
    for (slot, count) in matches.iter().enumerate() {
        writeln!(out, "  c[{slot}] = {count}")?;
    }
    Ok(matches)
}

fn warm_concat(out: &mut dyn Write) -> BenchResult<(usize, usize)> {
    writeln!(out, "  concat")?;
    let mut s1 = String::new();
    let mut s2 = String::new();
    let (l64, l26, l36) = (LINE_64, LINE_26, LINE_36);
    for i in 0..CONCAT_ROUNDS {
        if i % 2000 == 1999 {
            writeln!(out, "  i = {i}")?;
        }
        s1 = [String::new().as_str(), LINE_64, LINE_26, LINE_36].concat();
        s2 = String::new() + l64 + l26 + l36;
    }
    writeln!(out, "  s1l = {}, s2l = {}", s1.len(), s2.len())?;
    Ok((s1.len(), s2.len()))
}

fn warm_buffers(out: &mut dyn Write) -> BenchResult<(i64, i64)> {
    writeln!(out, "  buffer")?;
    let mut l = 0;
    let mut m = 0;
    let mut images_1: Vec<Vec<u8>> = Vec::with_capacity(BUFFER_ROUNDS);
    let mut images_2: Vec<Vec<u8>> = Vec::with_capacity(BUFFER_ROUNDS);
    for i in 0..BUFFER_ROUNDS {
        if i % 8000 == 7999 {
            writeln!(out, "  i = {i}")?;
        }
        let sb1 = LockedBuffer::new();
        let sb2 = LockedBuffer::with_capacity(128);
        let sb3 = LockedBuffer::from(LINE_64);
        let mut sb4 = String::new();
        let mut sb5 = String::with_capacity(128);
        let mut sb6 = String::from(LINE_64);
        sb1.append(LINE_64);
        sb2.append(LINE_26);
        sb3.append(LINE_36);
        sb4.push_str(LINE_64);
        sb5.push_str(LINE_26);
        sb6.push_str(LINE_36);
        let b1 = sb1.to_string().into_bytes();
        let b2 = String::from(sb6.as_str()).into_bytes();
        l += (sb1.len() + sb2.len() + sb3.len() + b1.len()) as i64;
        m += (sb4.len() + sb5.len() + sb6.len() + b2.len()) as i64;
        images_1.push(b1);
        images_2.push(b2);
    }
    black_box((&images_1, &images_2));
    writeln!(out, "  l = {l}, m = {m}")?;
    Ok((l, m))
}

fn warm_accessors(ctx: &mut TrialContext, out: &mut dyn Write) -> BenchResult<i64> {
    writeln!(out, "  AnInt")?;
    let mut q = 0;
    for i in 0..MAX_LOOP_2 {
        ctx.set_an_int(q + i + 1);
        q += ctx.an_int() - 1 - i;
    }
    writeln!(out, "  q = {q}")?;
    Ok(q)
}

pub fn warm_up(ctx: &mut TrialContext, out: &mut dyn Write) -> BenchResult<WarmupReport> {
    let matches = warm_containers(&ctx.fixtures, out)?;
    let (s1_len, s2_len) = warm_concat(out)?;
    let (l, m) = warm_buffers(out)?;
    let q = warm_accessors(ctx, out)?;
    Ok(WarmupReport {
        matches,
        s1_len,
        s2_len,
        l,
        m,
        q,
    })
}
