/// Module that provides the matching engine for patterns.
mod compiled_pattern;
pub(crate) use compiled_pattern::CompiledPattern;

/// Module that provides compiled rules.
mod compiled_rule;
pub(crate) use compiled_rule::CompiledRule;

/// Module that provides compiled state tables.
mod compiled_state_table;
pub(crate) use compiled_state_table::CompiledStateTable;
