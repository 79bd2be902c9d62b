//! The `dbg` option: print the expansion to stderr

use crate::framework::*;

use std::fmt::Error as E;
use std::fmt::Result as R;
use std::fmt::Write;

/// Type alias for our output text accumulator, in case we want to change it
type Out = String;

pub fn dump(decl: &EnumDecl, expansion: &TokenStream) {
    eprint!("{}", dump_text(decl, expansion));
}

fn dump_text(decl: &EnumDecl, expansion: &TokenStream) -> String {
    (|| {
        let mut w = Out::new();
        let name = decl.name();

        writeln!(
            w,
            "---------- declenum expansion for {} (start) ----------",
            name
        )?;
        dump_summary(&mut w, decl)?;
        writeln!(w, "{}", expansion)?;
        writeln!(
            w,
            "---------- declenum expansion for {} (end) ----------",
            name
        )?;

        Ok::<_, E>(w)
    })()
    .unwrap_or_else(|_| "<declenum dbg output failed>\n".into())
}

fn dump_summary(w: &mut Out, decl: &EnumDecl) -> R {
    let kind = match decl.kind {
        DeclKind::Declaration => "declenum!",
        DeclKind::Derive => "#[derive(Declenum)]",
    };
    writeln!(w, "// {}, repr {}, count {}", kind, decl.repr.repr, decl.count())?;
    for (i, value) in decl.values.iter().enumerate() {
        let discrim = match &value.discriminant {
            Some((_, expr)) => format!(" = {}", expr.to_token_stream()),
            None => "".into(),
        };
        writeln!(
            w,
            "//   [{}] {}{} (name {:?})",
            i,
            value.ident,
            discrim,
            decl.options.value_name(&value.ident),
        )?;
    }
    Ok(())
}
