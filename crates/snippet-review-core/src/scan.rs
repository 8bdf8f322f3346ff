//! Structural scanning without a grammar.
//!
//! Block nesting is approximated by counters over characters or keywords:
//!
//! - C#: `{` opens and `}` closes, per character, left to right. Braces in
//!   strings and comments count too; headers are matched with `//` comments
//!   removed.
//! - VB.NET: `Class`, `Module`, `Sub`, `Function` headers and a trailing
//!   `If ... Then` open; `End <Keyword>` closes. Matching is positional, so
//!   an `End Sub` closes whatever is open.
//! - SQL: each `BEGIN` token opens and each `END` token closes, counted per
//!   line and then accumulated.
//!
//! A body starts on a header line and ends on the first later line where
//! depth returns to zero (C#), on the first `End Sub`/`End Function`/
//! `End Class` (VB.NET), or on the matching `END` or a `GO` separator (SQL).

use regex::Regex;
use std::sync::LazyLock;

/// Compiles a pattern that is a literal in this crate or the rules crate.
///
/// # Panics
///
/// Panics if the pattern is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern is valid")
}

/// Identifier pattern shared by every header regex.
pub const IDENT: &str = r"[A-Za-z_][A-Za-z0-9_]*";

/// Words that take the return-type or name slot of a C# "`type name(`"
/// shape without declaring anything (`else if (`, `return Foo(`, ...).
const CSHARP_NON_DECLARATIONS: &[&str] = &[
    "if", "else", "for", "foreach", "while", "do", "switch", "case", "catch", "using", "lock",
    "return", "new", "throw", "await", "yield", "goto", "when", "in", "is", "as", "typeof",
    "sizeof", "nameof", "default", "fixed", "checked", "unchecked", "class", "struct",
    "interface", "record", "enum", "namespace", "delegate", "event", "operator", "base", "this",
];

static CSHARP_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:(?:public|private|protected|internal|static|async|virtual|override|sealed|partial|extern|abstract|unsafe)\s+)*([A-Za-z_][A-Za-z0-9_<>\[\]?.,]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(",
    )
});

static CSHARP_CLASS: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"(?i)\bclass\s+({IDENT})")));

static VB_PROCEDURE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^\s*((?:(?:Public|Private|Protected|Friend|Shared|Static|Overrides|Overridable|Overloads|NotOverridable|MustOverride|Async|Iterator|Partial)\s+)*)(Sub|Function)\s+({IDENT})\s*(?:\(([^)]*)\))?"
    ))
});

static VB_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^\s*(?:(?:Public|Private|Protected|Friend|Partial|MustInherit|NotInheritable)\s+)*(Class|Module)\s+({IDENT})"
    ))
});

static VB_END_PROCEDURE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*End\s+(Sub|Function)\b"));

static VB_END_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*End\s+(If|Sub|Function|Class|Module)\b"));

static VB_END_CLASS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^\s*End\s+Class\b"));

static VB_IF_THEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^\s*If\b.*\bThen\s*$"));

static SQL_PROCEDURE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)\bCREATE\s+(?:OR\s+ALTER\s+)?(?:PROC|PROCEDURE|FUNCTION)\s+(?:\[?{IDENT}\]?\.)?\[?({IDENT})\]?"
    ))
});

static SQL_BEGIN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bBEGIN\b"));

static SQL_BEGIN_TRANSACTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bBEGIN\s+(?:TRAN|TRANSACTION|DISTRIBUTED)\b"));

static SQL_END: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bEND\b"));

static SQL_AS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bAS\b"));

static SQL_GO: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^\s*GO\b"));

/// Procedure kind of a VB.NET header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    /// `Sub`
    Sub,
    /// `Function`
    Function,
}

/// A callable header found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Declared name.
    pub name: String,
    /// Parameter text, when the list opens and closes on the header line.
    pub params: Option<String>,
    /// Header declares no body (`;`-terminated, `MustOverride`).
    pub bodiless: bool,
}

impl Header {
    /// Number of comma-separated parameters; blank text counts as zero.
    #[must_use]
    pub fn param_count(&self) -> Option<usize> {
        self.params.as_deref().map(count_params)
    }
}

/// A detected method, class, or procedure body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Declared name, empty for an anonymous batch.
    pub name: String,
    /// 1-based header line.
    pub start: usize,
    /// 1-based closing line (last line when the body never closes).
    pub end: usize,
    /// Whether a closing boundary was found.
    pub closed: bool,
    /// Maximum structural depth reached inside the body.
    pub max_depth: usize,
    /// Callable headers inside the body (for classes).
    pub methods: usize,
}

impl Block {
    /// Closing line minus start line.
    #[must_use]
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

/// Counts comma-separated parameters. Blank text is zero parameters.
#[must_use]
pub fn count_params(params: &str) -> usize {
    if params.trim().is_empty() {
        0
    } else {
        params.matches(',').count() + 1
    }
}

/// Counts case-insensitive whole-word occurrences of `word` in `line`.
#[must_use]
pub fn count_words(line: &str, word: &str) -> usize {
    let lowered = line.to_lowercase();
    let word = word.to_lowercase();
    let bytes = lowered.as_bytes();
    lowered
        .match_indices(&word)
        .filter(|(idx, _)| {
            let before = idx.checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(idx + word.len()).copied();
            !before.is_some_and(is_word_byte) && !after.is_some_and(is_word_byte)
        })
        .count()
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// ---------------------------------------------------------------------------
// Per-line depth deltas
// ---------------------------------------------------------------------------

/// Opening and closing constructs found on one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delta {
    /// Constructs opened on the line.
    pub opens: usize,
    /// Constructs closed on the line.
    pub closes: usize,
}

/// Counts `{` and `}` on a line.
#[must_use]
pub fn brace_delta(line: &str) -> Delta {
    line.chars().fold(Delta::default(), |d, ch| match ch {
        '{' => Delta {
            opens: d.opens + 1,
            ..d
        },
        '}' => Delta {
            closes: d.closes + 1,
            ..d
        },
        _ => d,
    })
}

/// Counts VB.NET block keywords on a line.
///
/// Comment lines (`'` or `REM`) contribute nothing; a trailing `'` comment
/// is ignored.
#[must_use]
pub fn vb_block_delta(line: &str) -> Delta {
    let trimmed = line.trim_start();
    if trimmed.starts_with('\'') || trimmed.to_ascii_lowercase().starts_with("rem ") {
        return Delta::default();
    }
    let line = strip_comment(line, "'");
    if VB_END_BLOCK.is_match(line) {
        return Delta {
            opens: 0,
            closes: 1,
        };
    }
    let opens = vb_procedure_header(line).is_some_and(|(_, h)| !h.bodiless)
        || VB_CLASS.is_match(line)
        || VB_IF_THEN.is_match(line);
    Delta {
        opens: usize::from(opens),
        closes: 0,
    }
}

/// Counts SQL `BEGIN`/`END` tokens on a line.
///
/// `BEGIN TRAN`/`BEGIN TRANSACTION` does not open a block.
#[must_use]
pub fn sql_block_delta(line: &str) -> Delta {
    let begins = SQL_BEGIN.find_iter(line).count();
    let transactions = SQL_BEGIN_TRANSACTION.find_iter(line).count();
    Delta {
        opens: begins.saturating_sub(transactions),
        closes: SQL_END.find_iter(line).count(),
    }
}

/// Cuts a line at the first `marker` outside a double-quoted string.
#[must_use]
pub fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    let mut in_string = false;
    for (i, ch) in line.char_indices() {
        if ch == '"' {
            in_string = !in_string;
        } else if !in_string && line[i..].starts_with(marker) {
            return &line[..i];
        }
    }
    line
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Whether `word` is a C# keyword that can sit where a type or declared
/// name would (`else`, `return`, `new`, ...). C# keywords are lowercase, so
/// `Default` or `Do` stay valid method names.
#[must_use]
pub fn is_csharp_non_declaration(word: &str) -> bool {
    CSHARP_NON_DECLARATIONS.contains(&word)
}

/// All C# method-like headers on a line (`type Name(`), in order.
#[must_use]
pub fn csharp_method_headers(line: &str) -> Vec<Header> {
    CSHARP_HEADER
        .captures_iter(line)
        .filter_map(|caps| {
            let return_type = caps.get(1)?.as_str();
            let name = caps.get(2)?;
            if is_csharp_non_declaration(return_type) || is_csharp_non_declaration(name.as_str()) {
                return None;
            }
            let whole = caps.get(0)?;
            let after_paren = &line[whole.end()..];
            let params = after_paren.find(')').map(|i| after_paren[..i].to_string());
            let rest = params
                .as_ref()
                .map_or("", |p| &after_paren[p.len() + 1..]);
            let bodiless = !line.contains('{') && rest.trim_end().ends_with(';');
            Some(Header {
                name: name.as_str().to_string(),
                params,
                bodiless,
            })
        })
        .collect()
}

/// First C# method-like header on a line.
#[must_use]
pub fn csharp_method_header(line: &str) -> Option<Header> {
    csharp_method_headers(line).into_iter().next()
}

/// Name declared by a C# `class Name` header.
#[must_use]
pub fn csharp_class_header(line: &str) -> Option<String> {
    CSHARP_CLASS.captures(line).map(|c| c[1].to_string())
}

/// VB.NET `Sub`/`Function` header at the start of a line.
#[must_use]
pub fn vb_procedure_header(line: &str) -> Option<(ProcedureKind, Header)> {
    let caps = VB_PROCEDURE.captures(line)?;
    let kind = if caps[2].eq_ignore_ascii_case("sub") {
        ProcedureKind::Sub
    } else {
        ProcedureKind::Function
    };
    let bodiless = caps[1].to_ascii_lowercase().contains("mustoverride");
    Some((
        kind,
        Header {
            name: caps[3].to_string(),
            params: caps.get(4).map(|m| m.as_str().to_string()),
            bodiless,
        },
    ))
}

/// Name declared by a VB.NET `Class Name` header.
#[must_use]
pub fn vb_class_header(line: &str) -> Option<String> {
    VB_CLASS
        .captures(line)
        .filter(|c| c[1].eq_ignore_ascii_case("class"))
        .map(|c| c[2].to_string())
}

/// Whether a line closes a VB.NET procedure, and which kind.
#[must_use]
pub fn vb_procedure_end(line: &str) -> Option<ProcedureKind> {
    VB_END_PROCEDURE.captures(line).map(|c| {
        if c[1].eq_ignore_ascii_case("sub") {
            ProcedureKind::Sub
        } else {
            ProcedureKind::Function
        }
    })
}

/// SQL `CREATE PROC|PROCEDURE|FUNCTION` header.
///
/// Parameters are read from a parenthesized list, or from `@name` parameters
/// up to `AS` when the list is unparenthesized.
#[must_use]
pub fn sql_procedure_header(line: &str) -> Option<Header> {
    let caps = SQL_PROCEDURE.captures(line)?;
    let whole = caps.get(0)?;
    let rest = line[whole.end()..].trim_start();
    let params = if let Some(inner) = rest.strip_prefix('(') {
        inner.find(')').map(|i| inner[..i].to_string())
    } else if rest.starts_with('@') {
        let end = SQL_AS.find(rest).map_or(rest.len(), |m| m.start());
        Some(rest[..end].to_string())
    } else {
        None
    };
    Some(Header {
        name: caps[1].to_string(),
        params,
        bodiless: false,
    })
}

/// Whether a line is a `GO` batch separator.
#[must_use]
pub fn is_batch_separator(line: &str) -> bool {
    SQL_GO.is_match(line)
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

/// Scans a brace body from `start` (0-based). Returns the 0-based closing
/// index, whether it closed, and the maximum depth reached.
fn brace_body(lines: &[&str], start: usize) -> (usize, bool, usize) {
    let mut depth: i64 = 0;
    let mut max_depth: i64 = 0;
    let mut entered = false;
    for (j, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    entered = true;
                    max_depth = max_depth.max(depth);
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if entered && depth <= 0 {
            return (j, true, usize::try_from(max_depth).unwrap_or(0));
        }
    }
    (
        lines.len().saturating_sub(1),
        false,
        usize::try_from(max_depth).unwrap_or(0),
    )
}

/// C# method bodies, in order. Nested methods are part of their parent.
#[must_use]
pub fn csharp_methods(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        match csharp_method_header(strip_comment(lines[i], "//")) {
            Some(header) if !header.bodiless => {
                let (end, closed, max_depth) = brace_body(lines, i);
                blocks.push(Block {
                    name: header.name,
                    start: i + 1,
                    end: end + 1,
                    closed,
                    max_depth,
                    methods: 0,
                });
                i = end + 1;
            }
            _ => i += 1,
        }
    }
    tracing::trace!(count = blocks.len(), "csharp method bodies");
    blocks
}

/// C# class bodies with the number of method headers inside each.
#[must_use]
pub fn csharp_classes(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(name) = csharp_class_header(strip_comment(lines[i], "//")) else {
            i += 1;
            continue;
        };
        let (end, closed, max_depth) = brace_body(lines, i);
        let methods = lines[i..=end]
            .iter()
            .filter(|l| csharp_method_header(strip_comment(l, "//")).is_some())
            .count();
        blocks.push(Block {
            name,
            start: i + 1,
            end: end + 1,
            closed,
            max_depth,
            methods,
        });
        i = end + 1;
    }
    blocks
}

/// VB.NET `Sub`/`Function` bodies, each ending at the first
/// `End Sub`/`End Function`.
#[must_use]
pub fn vb_procedures(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let header = match vb_procedure_header(lines[i]) {
            Some((_, header)) if !header.bodiless => header,
            _ => {
                i += 1;
                continue;
            }
        };
        let mut depth = 0usize;
        let mut max_depth = 0usize;
        let mut end = lines.len().saturating_sub(1);
        let mut closed = false;
        for (j, line) in lines.iter().enumerate().skip(i) {
            let delta = vb_block_delta(line);
            depth += delta.opens;
            max_depth = max_depth.max(depth);
            depth = depth.saturating_sub(delta.closes);
            if vb_procedure_end(line).is_some() {
                end = j;
                closed = true;
                break;
            }
        }
        blocks.push(Block {
            name: header.name,
            start: i + 1,
            end: end + 1,
            closed,
            max_depth,
            methods: 0,
        });
        i = end + 1;
    }
    tracing::trace!(count = blocks.len(), "vbnet procedure bodies");
    blocks
}

/// VB.NET class bodies, each ending at the first `End Class`.
#[must_use]
pub fn vb_classes(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(name) = vb_class_header(lines[i]) else {
            i += 1;
            continue;
        };
        let mut end = lines.len().saturating_sub(1);
        let mut closed = false;
        let mut methods = 0;
        for (j, line) in lines.iter().enumerate().skip(i) {
            if vb_procedure_header(line).is_some() {
                methods += 1;
            }
            if VB_END_CLASS.is_match(line) {
                end = j;
                closed = true;
                break;
            }
        }
        blocks.push(Block {
            name,
            start: i + 1,
            end: end + 1,
            closed,
            max_depth: 0,
            methods,
        });
        i = end + 1;
    }
    blocks
}

/// Accumulates SQL `BEGIN`/`END` depth over `lines[start..]`, stopping at the
/// matching `END` or before a later `GO`.
fn sql_body(lines: &[&str], start: usize) -> (usize, bool, usize) {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut entered = false;
    for (j, line) in lines.iter().enumerate().skip(start) {
        if j > start && is_batch_separator(line) {
            return (j - 1, true, max_depth);
        }
        let delta = sql_block_delta(line);
        if delta.opens > 0 {
            entered = true;
        }
        depth += delta.opens;
        max_depth = max_depth.max(depth);
        depth = depth.saturating_sub(delta.closes);
        if entered && depth == 0 {
            return (j, true, max_depth);
        }
    }
    (lines.len().saturating_sub(1), false, max_depth)
}

/// SQL procedure and function bodies.
#[must_use]
pub fn sql_procedures(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(header) = sql_procedure_header(lines[i]) else {
            i += 1;
            continue;
        };
        let (end, closed, max_depth) = sql_body(lines, i);
        blocks.push(Block {
            name: header.name,
            start: i + 1,
            end: end + 1,
            closed,
            max_depth,
            methods: 0,
        });
        i = end + 1;
    }
    tracing::trace!(count = blocks.len(), "sql procedure bodies");
    blocks
}

/// The whole snippet as one anonymous SQL batch starting at line 1.
#[must_use]
pub fn sql_batch(lines: &[&str]) -> Block {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for line in lines {
        let delta = sql_block_delta(line);
        depth += delta.opens;
        max_depth = max_depth.max(depth);
        depth = depth.saturating_sub(delta.closes);
    }
    Block {
        name: String::new(),
        start: 1,
        end: lines.len().max(1),
        closed: true,
        max_depth,
        methods: 0,
    }
}
