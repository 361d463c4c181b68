//! Shared class strings so pages stay visually consistent.

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";
pub const PANEL_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";

pub const BTN_PRIMARY: &str = "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white transition hover:bg-sky-400 disabled:cursor-not-allowed disabled:opacity-40";
pub const BTN_SECONDARY: &str =
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 transition hover:bg-slate-800";

pub const TEXT_MUTED: &str = "text-slate-500";
pub const ACCENT: &str = "text-emerald-400";
