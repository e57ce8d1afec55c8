// Library target for the mockdraft binary: config, argument parsing,
// command plumbing and report rendering, kept testable outside main.

pub mod cli;
pub mod commands;
pub mod config;
pub mod report;
