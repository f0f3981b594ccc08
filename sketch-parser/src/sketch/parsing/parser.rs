//! Statement parser and command builders
//!
//! Turns lexed statements into a [Program]: the command list in source order
//! plus the symbol table of declared identifiers. The statement shape is
//! matched against the declarative grammar in [super::grammar]; the rule
//! name then selects the builder that extracts arguments.

use crate::sketch::ast::{
    CenterSpec, Command, Diagnostic, ParseError, Point, SymbolTable,
};
use crate::sketch::lexing::Statement;
use crate::sketch::parsing::grammar;
use crate::sketch::token::{Keyword, Token};
use serde::Serialize;

/// A parsed program: the command list (in source order - drawing order
/// depends on it), the symbol table, and everything the parser had to
/// complain about. Commands and `lines` are co-indexed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Program {
    pub commands: Vec<Command>,
    pub lines: Vec<usize>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands paired with their source lines, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Command)> {
        self.lines.iter().copied().zip(self.commands.iter())
    }
}

/// Argument tokens of a statement, after stripping the head keyword,
/// connective markers and stray punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Arg {
    Id(String),
    Num(String),
}

impl Arg {
    fn shape_atom(&self) -> &'static str {
        match self {
            Arg::Id(_) => "<id>",
            Arg::Num(_) => "<num>",
        }
    }
}

/// Parse a full statement list into a Program.
pub fn parse_statements(statements: &[Statement]) -> Program {
    let mut program = Program::default();

    for statement in statements {
        match parse_statement(statement, &mut program.diagnostics) {
            Ok(command) => {
                let index = program.commands.len();
                if let Some(id) = command.declared_id() {
                    if program.symbols.declare(id, index).is_err() {
                        program.diagnostics.push(Diagnostic::from(
                            ParseError::DuplicateIdentifier {
                                name: id.to_string(),
                                line: statement.line,
                            },
                        ));
                        continue;
                    }
                }
                program.commands.push(command);
                program.lines.push(statement.line);
            }
            Err(err) => program.diagnostics.push(Diagnostic::from(err)),
        }
    }

    program
}

/// Parse one statement into a command. Stray punctuation is flagged into
/// `diagnostics` as warnings even when the statement otherwise parses.
fn parse_statement(
    statement: &Statement,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Command, ParseError> {
    let line = statement.line;
    let mut head: Option<Keyword> = None;
    let mut args: Vec<Arg> = Vec::new();
    let mut seen_mid_keyword: Option<Keyword> = None;

    for (token, _) in &statement.tokens {
        match token {
            Token::Keyword(kw) if kw.is_marker() => {}
            Token::Keyword(kw) => {
                if head.is_none() && args.is_empty() {
                    head = Some(*kw);
                } else {
                    // A statement keyword in argument position; remembered so
                    // the arity error below can name it.
                    seen_mid_keyword = seen_mid_keyword.or(Some(*kw));
                }
            }
            Token::Ident(name) => args.push(Arg::Id(name.clone())),
            Token::Number(literal) => args.push(Arg::Num(literal.clone())),
            Token::Punct(ch) => diagnostics.push(
                Diagnostic::warning(format!("ignored stray character '{}'", ch))
                    .with_line(line)
                    .with_code("stray-character"),
            ),
            // Whitespace and terminators never survive statement splitting.
            Token::Whitespace | Token::Newline | Token::Period => {}
        }
    }

    let head = head.ok_or_else(|| ParseError::UnknownKeyword {
        word: statement
            .tokens
            .first()
            .map(|(t, _)| t.to_string())
            .unwrap_or_default(),
        line,
    })?;

    let shape = statement_shape(head, &args, seen_mid_keyword);
    let rule = grammar::match_shape(&shape).ok_or_else(|| ParseError::MalformedStatement {
        keyword: head.as_str(),
        expected: expected_shape(head),
        found: found_shape(&args, seen_mid_keyword),
        line,
    })?;

    build_command(rule, head, &args, line)
}

/// Render the statement to its grammar shape string.
fn statement_shape(head: Keyword, args: &[Arg], mid_keyword: Option<Keyword>) -> String {
    let mut shape = format!("<{}>", head.as_str());
    for arg in args {
        shape.push_str(arg.shape_atom());
    }
    if let Some(kw) = mid_keyword {
        // Poison the shape so no rule can match a statement with a stray
        // statement keyword among its arguments.
        shape.push_str(&format!("<{}>", kw.as_str()));
    }
    shape
}

/// Human-readable form of what the statement actually contained.
fn found_shape(args: &[Arg], mid_keyword: Option<Keyword>) -> String {
    if args.is_empty() && mid_keyword.is_none() {
        return "no arguments".to_string();
    }
    let mut parts: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            Arg::Id(name) => format!("identifier '{}'", name),
            Arg::Num(literal) => format!("number {}", literal),
        })
        .collect();
    if let Some(kw) = mid_keyword {
        parts.push(format!("keyword '{}'", kw.as_str()));
    }
    parts.join(", ")
}

/// The grammar each statement keyword accepts, for error messages.
fn expected_shape(head: Keyword) -> &'static str {
    match head {
        Keyword::Point => "point <id> <x> <y>",
        Keyword::Circle => "circle [<id>] (<ref> | <x> <y>) <radius>",
        Keyword::Chord => "chord <ref> <ref>",
        Keyword::Segment => "segment <ref> <ref>",
        Keyword::Radius => "radius <ref> <ref>",
        // Markers never become statement heads.
        _ => "a statement keyword",
    }
}

fn parse_int(literal: &str, line: usize) -> Result<i64, ParseError> {
    literal.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        literal: literal.to_string(),
        line,
    })
}

/// Build the command for a matched grammar rule.
///
/// The rule name and the argument slice always agree because the shape
/// regex just matched; the catch-all arm exists so a rule/builder mismatch
/// surfaces as a syntax error rather than a panic.
fn build_command(
    rule: &'static str,
    head: Keyword,
    args: &[Arg],
    line: usize,
) -> Result<Command, ParseError> {
    match (rule, args) {
        ("point", [Arg::Id(id), Arg::Num(x), Arg::Num(y)]) => Ok(Command::MarkPoint {
            id: id.clone(),
            x: parse_int(x, line)?,
            y: parse_int(y, line)?,
        }),
        ("circle_named_ref", [Arg::Id(id), Arg::Id(center), Arg::Num(radius)]) => {
            Ok(Command::DrawCircle {
                id: Some(id.clone()),
                center: CenterSpec::Reference(center.clone()),
                radius: parse_int(radius, line)?,
            })
        }
        ("circle_ref", [Arg::Id(center), Arg::Num(radius)]) => Ok(Command::DrawCircle {
            id: None,
            center: CenterSpec::Reference(center.clone()),
            radius: parse_int(radius, line)?,
        }),
        ("circle_named_inline", [Arg::Id(id), Arg::Num(x), Arg::Num(y), Arg::Num(radius)]) => {
            Ok(Command::DrawCircle {
                id: Some(id.clone()),
                center: CenterSpec::Inline(Point::new(parse_int(x, line)?, parse_int(y, line)?)),
                radius: parse_int(radius, line)?,
            })
        }
        ("circle_inline", [Arg::Num(x), Arg::Num(y), Arg::Num(radius)]) => {
            Ok(Command::DrawCircle {
                id: None,
                center: CenterSpec::Inline(Point::new(parse_int(x, line)?, parse_int(y, line)?)),
                radius: parse_int(radius, line)?,
            })
        }
        ("chord", [Arg::Id(start), Arg::Id(end)]) => Ok(Command::DrawChord {
            start: start.clone(),
            end: end.clone(),
        }),
        ("segment", [Arg::Id(start), Arg::Id(end)]) => Ok(Command::DrawSegment {
            start: start.clone(),
            end: end.clone(),
        }),
        ("radius", [Arg::Id(center), Arg::Id(end)]) => Ok(Command::DrawRadius {
            center: center.clone(),
            end: end.clone(),
        }),
        _ => Err(ParseError::MalformedStatement {
            keyword: head.as_str(),
            expected: expected_shape(head),
            found: found_shape(args, None),
            line,
        }),
    }
}
