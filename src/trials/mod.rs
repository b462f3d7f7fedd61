// The trial table.
//
// `catalogue()` lists the 44 timed trials in the order the driver runs
// them. Labels keep a letter-number prefix per family so result lines can
// be compared across runs.

pub mod access;
pub mod bytes;
pub mod concat;
pub mod containers;
pub mod scan;
pub mod warmup;

use serde::Serialize;

use crate::context::TrialContext;
use crate::error::BenchResult;
use crate::store::{CapacityClass, LockedTable, PlainMap};

pub type TrialFn = fn(&mut TrialContext) -> BenchResult<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Concatenation,
    ByteExtraction,
    Scanning,
    FieldAccess,
    Population,
    Lookup,
}

#[derive(Debug, Clone, Copy)]
pub struct Trial {
    pub label: &'static str,
    pub family: Family,
    pub run: TrialFn,
}

impl Trial {
    const fn new(label: &'static str, family: Family, run: TrialFn) -> Self {
        Trial { label, family, run }
    }
}

pub fn catalogue() -> Vec<Trial> {
    use CapacityClass::{Default as Def, Oversized as Over, Tuned};
    use Family::*;
    use self::containers::{get_nested_shared, put_nested_local, put_nested_shared, put_single_shot};

    vec![
        Trial::new("a1_concat_str", Concatenation, concat::concat_str),
        Trial::new("a2_plus_str", Concatenation, concat::plus_str),
        Trial::new("a3_loc_strbuf_def", Concatenation, concat::local_locked_default),
        Trial::new("a4_loc_strbuf_tuned", Concatenation, concat::local_locked_tuned),
        Trial::new("a5_loc_strbui_def", Concatenation, concat::local_plain_default),
        Trial::new("a6_loc_strbui_tuned", Concatenation, concat::local_plain_tuned),
        Trial::new("a7_fld_strbuf_def", Concatenation, concat::field_locked_default),
        Trial::new("a8_fld_strbuf_tuned", Concatenation, concat::field_locked_tuned),
        Trial::new("a9_fld_strbui_def", Concatenation, concat::field_plain_default),
        Trial::new("a10_fld_strbui_tuned", Concatenation, concat::field_plain_tuned),
        Trial::new("b1_byte_buf_to_string", ByteExtraction, bytes::locked_to_string),
        Trial::new("b2_byte_new_string", ByteExtraction, bytes::locked_new_string),
        Trial::new("b3_byte_bui_to_string", ByteExtraction, bytes::plain_to_string),
        Trial::new("c1_for_methods", Scanning, scan::for_methods),
        Trial::new("c2_for_variables", Scanning, scan::for_variables),
        Trial::new("c3_for_shared", Scanning, scan::for_shared),
        Trial::new("d2_access_field_small", FieldAccess, access::field_small),
        Trial::new("d1_access_getter_setter_small", FieldAccess, access::accessor_small),
        Trial::new("d4_access_field_big", FieldAccess, access::field_big),
        Trial::new("d3_access_getter_setter_big", FieldAccess, access::accessor_big),
        Trial::new("e1_table_put_1000x1_loc_def", Population, |ctx| {
            put_single_shot::<LockedTable>(ctx, Def)
        }),
        Trial::new("e2_table_put_1000x1_loc_tuned", Population, |ctx| {
            put_single_shot::<LockedTable>(ctx, Tuned)
        }),
        Trial::new("e3_table_put_1000x1_loc_over", Population, |ctx| {
            put_single_shot::<LockedTable>(ctx, Over)
        }),
        Trial::new("f1_table_put_100x10_loc_def", Population, |ctx| {
            put_nested_local::<LockedTable>(ctx, Def)
        }),
        Trial::new("f2_table_put_100x10_loc_tuned", Population, |ctx| {
            put_nested_local::<LockedTable>(ctx, Tuned)
        }),
        Trial::new("f3_table_put_100x10_loc_over", Population, |ctx| {
            put_nested_local::<LockedTable>(ctx, Over)
        }),
        Trial::new("g1_table_put_100x10_glob_def", Population, |ctx| {
            put_nested_shared::<LockedTable>(ctx, Def)
        }),
        Trial::new("g2_table_put_100x10_glob_tuned", Population, |ctx| {
            put_nested_shared::<LockedTable>(ctx, Tuned)
        }),
        Trial::new("g3_table_put_100x10_glob_over", Population, |ctx| {
            put_nested_shared::<LockedTable>(ctx, Over)
        }),
        Trial::new("h1_table_get_100x10_glob_def", Lookup, |ctx| {
            get_nested_shared::<LockedTable>(ctx, Def)
        }),
        Trial::new("h2_table_get_100x10_glob_tuned", Lookup, |ctx| {
            get_nested_shared::<LockedTable>(ctx, Tuned)
        }),
        Trial::new("h3_table_get_100x10_glob_over", Lookup, |ctx| {
            get_nested_shared::<LockedTable>(ctx, Over)
        }),
        Trial::new("i1_map_put_1000x1_loc_def", Population, |ctx| {
            put_single_shot::<PlainMap>(ctx, Def)
        }),
        Trial::new("i2_map_put_1000x1_loc_tuned", Population, |ctx| {
            put_single_shot::<PlainMap>(ctx, Tuned)
        }),
        Trial::new("i3_map_put_1000x1_loc_over", Population, |ctx| {
            put_single_shot::<PlainMap>(ctx, Over)
        }),
        Trial::new("j1_map_put_100x10_loc_def", Population, |ctx| {
            put_nested_local::<PlainMap>(ctx, Def)
        }),
        Trial::new("j2_map_put_100x10_loc_tuned", Population, |ctx| {
            put_nested_local::<PlainMap>(ctx, Tuned)
        }),
        Trial::new("j3_map_put_100x10_loc_over", Population, |ctx| {
            put_nested_local::<PlainMap>(ctx, Over)
        }),
        Trial::new("k1_map_put_100x10_glob_def", Population, |ctx| {
            put_nested_shared::<PlainMap>(ctx, Def)
        }),
        Trial::new("k2_map_put_100x10_glob_tuned", Population, |ctx| {
            put_nested_shared::<PlainMap>(ctx, Tuned)
        }),
        Trial::new("k3_map_put_100x10_glob_over", Population, |ctx| {
            put_nested_shared::<PlainMap>(ctx, Over)
        }),
        Trial::new("l1_map_get_100x10_glob_def", Lookup, |ctx| {
            get_nested_shared::<PlainMap>(ctx, Def)
        }),
        Trial::new("l2_map_get_100x10_glob_tuned", Lookup, |ctx| {
            get_nested_shared::<PlainMap>(ctx, Tuned)
        }),
        Trial::new("l3_map_get_100x10_glob_over", Lookup, |ctx| {
            get_nested_shared::<PlainMap>(ctx, Over)
        }),
    ]
}
