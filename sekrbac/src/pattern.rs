/// A single permission string, classified by whether it carries any `*`
/// glob token.
///
/// A `Glob` compiles to an anchored regular expression where every
/// non-`*` span is escaped literally and every run of `*` becomes a
/// single greedy `.*`.  The `.*` deliberately crosses `.` segment
/// boundaries, so `program.*` covers `program.jurusan.PPLG.edit` as
/// well as `program.edit`; this matches the historical behaviour the
/// rest of the system depends on and must not be tightened to
/// segment-bounded matching.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PermissionPattern {
    Literal(String),
    Glob(String),
}

mod impls;
