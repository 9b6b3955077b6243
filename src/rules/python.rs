use super::DefaultPair;

/// Python rewrites. Right sides are literal; `\1` is kept as written.
pub(super) const PAIRS: &[DefaultPair] = &[
    // function definition
    DefaultPair { left: r"def\s+(\w+)\s*\(\s*\)\s*:", right: r"def \1(self):", priority: 100, right_is_literal: true },
    // class inheritance
    DefaultPair { left: r"class\s+(\w+)\s*:", right: r"class \1(RiftObject):", priority: 90, right_is_literal: true },
    // walrus assignment
    DefaultPair { left: r"(\w+)\s*:=\s*(.+)", right: r"self.\1 = \2", priority: 80, right_is_literal: true },
    DefaultPair { left: r"@quantum", right: r"@rift_quantum_decorator", priority: 200, right_is_literal: true },
];
