use super::DefaultPair;

/// Go rewrites. Right sides are literal, markers included.
pub(super) const PAIRS: &[DefaultPair] = &[
    DefaultPair { left: r"var\s+(\w+)\s+(\w+)", right: r#"riftVar$2("$1")"#, priority: 100, right_is_literal: true },
    DefaultPair { left: r"func\s+(\w+)\s*\(\s*\)", right: r#"riftFunc("$1", func()"#, priority: 90, right_is_literal: true },
    // goroutine launch
    DefaultPair {
        left: r"go\s+(\w+)\s*\(\)",
        right: r#"riftGo(riftFunc("$1", func()"#,
        priority: 85,
        right_is_literal: true,
    },
    DefaultPair {
        left: r"const\s+(\w+)\s*=\s*(.+)",
        right: r#"riftConst("$1", $2)"#,
        priority: 80,
        right_is_literal: true,
    },
    DefaultPair {
        left: r"type\s+(\w+)\s+struct",
        right: r#"riftStruct("$1", struct"#,
        priority: 70,
        right_is_literal: true,
    },
    DefaultPair { left: r"@quantum", right: r"@riftQuantumDecorator", priority: 200, right_is_literal: true },
];
