//! The fixed catalog of context files recognised in a workspace.
//!
//! Order is display order only. Names are matched case-sensitively, which is
//! why both `MEMORY.md` and `memory.md` appear.

use crate::types::ContextFileSpec;

pub const CONTEXT_FILES: &[ContextFileSpec] = &[
    ContextFileSpec { name: "SOUL.md", description: "Personality / soul definition" },
    ContextFileSpec { name: "MEMORY.md", description: "Memory" },
    ContextFileSpec { name: "AGENTS.md", description: "Agent configuration" },
    ContextFileSpec { name: "IDENTITY.md", description: "Identity configuration" },
    ContextFileSpec { name: "USER.md", description: "User context" },
    ContextFileSpec { name: "TOOLS.md", description: "Tool configuration" },
    ContextFileSpec { name: "HEARTBEAT.md", description: "Heartbeat / autonomous behavior" },
    ContextFileSpec { name: "BOOTSTRAP.md", description: "Bootstrap instructions" },
    ContextFileSpec { name: "memory.md", description: "Memory (alt)" },
];

/// Look up a catalog entry by exact filename.
pub fn lookup(name: &str) -> Option<&'static ContextFileSpec> {
    CONTEXT_FILES.iter().find(|spec| spec.name == name)
}
