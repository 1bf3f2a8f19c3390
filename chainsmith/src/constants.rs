pub(crate) const HEADER: &str = "
╭─────────────────────────────────────────────────────────────────╮
│                                                                 │
│                          CHAINSMITH                             │
│             Synthesizer of Chained Method Bodies                │
│                                                                 │
│                        Author: nethoxa                          │
│                       Twitter: @nethoxa                         │
│                                                                 │
╰─────────────────────────────────────────────────────────────────╯
";

pub(crate) const RED: &str = "\x1b[31m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const RESET: &str = "\x1b[0m";
