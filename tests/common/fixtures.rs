//! Java sources shared by the scenario and CLI tests.

/// One marked method with a literal watcher
pub const BILLING_V1: &str = r#"package com.acme;

import herald.annotations.NotifyChanges;

public class Billing {
    @NotifyChanges("alice")
    public int foo() {
        return 1;
    }

    public int unwatched() {
        return 0;
    }
}
"#;

/// `BILLING_V1` with the body of `foo` changed
pub const BILLING_V2: &str = r#"package com.acme;

import herald.annotations.NotifyChanges;

public class Billing {
    @NotifyChanges("alice")
    public int foo() {
        return 2;
    }

    public int unwatched() {
        return 0;
    }
}
"#;

/// `BILLING_V1` with only an unwatched method changed
pub const BILLING_V1_UNWATCHED_EDIT: &str = r#"package com.acme;

import herald.annotations.NotifyChanges;

public class Billing {
    @NotifyChanges("alice")
    public int foo() {
        return 1;
    }

    public int unwatched() {
        return 42;
    }
}
"#;

/// Two marked declarations, one of them watched through a constant
pub const LEDGER: &str = r#"package com.acme;

import herald.annotations.*;

public class Ledger {
    static final String[] TEAM = {"alice", "bob"};

    @NotifyChanges(TEAM)
    private long balance;

    /**
     * Posts an entry.
     */
    @NotifyChanges({"carol"})
    public void post(long amount) {
        balance += amount;
    }
}
"#;
