//! Shared class strings so the form controls stay visually consistent.

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 \
     text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";

/// Compact variant for inputs embedded in table cells.
pub const INPUT_CELL: &str = "w-full rounded-md border border-slate-700 bg-slate-950 px-2 py-1.5 \
     text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400";

pub const BTN_REMOVE: &str = "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] \
     font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10";
