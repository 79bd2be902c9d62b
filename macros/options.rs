//! "Options", keyword modifiers for a declaration
//!
//! These appear as `#[declenum(...)]` attributes,
//! on the `declenum!` input or on a `#[derive(Declenum)]` enum.
//! Several attributes, and several options in one attribute, "combine".

use crate::prelude::*;

use OptionDetails as OD;

//---------- types, ordered from general to specific ----------

/// All the options, semantically resolved
#[derive(Default, Debug, Clone)]
pub struct DeOptions {
    pub dbg: bool,
    pub rename_all: Option<(RenameAll, Span)>,
    pub krate: Option<(syn::Path, Span)>,
}

/// A single option
#[derive(Debug)]
struct DeOption {
    pub kw_span: Span,
    pub od: OptionDetails,
}

/// Enum for the details of an option
#[derive(Debug, Clone)]
enum OptionDetails {
    Dbg,
    RenameAll(RenameAll),
    Crate(syn::Path),
}

/// Define cases using heck
///
/// heck doesn't provide standard names for case conversions,
/// or an enum to represent a case conversion.
/// This macro defines both.  Specifically:
///  * The fieldless enum `RenameAll`.
///  * Its `FromStr` implementation, which accepts the `$keyword`s.
///  * Its `apply()` method, which actually performs the conversion.
///
/// `$heck` is the name of the `As` conversion struct in the heck
/// API.  It will become the variant name in `RenameAll`.
///
/// `$keyword` are the keywords we recognise for this case conversion.
#[cfg(feature = "case")]
macro_rules! define_cases { {
    $(
        $heck:ident $( $keyword:literal )*,
    )*
} => {
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub enum RenameAll {
        $( $heck, )*
    }

    impl FromStr for RenameAll {
        type Err = String;
        fn from_str(s: &str) -> Result<Self, String> {
            Ok(match s {
              $(
                $( $keyword )|* => RenameAll::$heck,
              )*
                _ => return Err(format!(
                    "unknown case conversion `{}` (expected one of: {})",
                    s,
                    [ $( $( $keyword, )* )* ].iter().join(", "),
                )),
            })
        }
    }

    impl RenameAll {
        pub fn apply(self, input: &str) -> String {
            match self {
              $(
                RenameAll::$heck => heck::$heck(input).to_string(),
              )*
            }
        }
    }
} }

#[cfg(not(feature = "case"))]
macro_rules! define_cases { {
    $(
        $heck:ident $( $keyword:literal )*,
    )*
} => {
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub enum RenameAll {}

    impl FromStr for RenameAll {
        type Err = String;
        fn from_str(s: &str) -> Result<Self, String> {
            match s {
              $(
                $( $keyword )|* => Err(
 "case changing not supported, enable `case` feature of `declenum`"
                        .into()
                ),
              )*
                _ => Err(format!(
                    "unknown case conversion `{}` (expected one of: {})",
                    s,
                    [ $( $( $keyword, )* )* ].iter().join(", "),
                )),
            }
        }
    }

    impl RenameAll {
        pub fn apply(self, _input: &str) -> String {
            match self {}
        }
    }
} }

define_cases! {
    // heck API       our keyword (and aliases)  our example(s)
    AsUpperCamelCase    "pascal_case"              "PascalCase"
                        "upper_camel_case"         "UpperCamelCase"    ,
    AsLowerCamelCase    "lower_camel_case"         "lowerCamelCase"    ,
    AsSnakeCase         "snake_case",
    AsShoutySnakeCase   "shouty_snake_case"        "SHOUTY_SNAKE_CASE"
                        "screaming_snake_case"     "SCREAMING_SNAKE_CASE" ,
    AsKebabCase         "kebab_case"               "kebab-case"        ,
    AsTitleCase         "title_case"               "Title Case"        ,
}

//---------- parsing ----------

impl DeOptions {
    /// Collect the options from all `#[declenum(...)]` in `attrs`
    ///
    /// Returns the options, and the attributes which were *not*
    /// ours, which should be passed through to the output.
    pub fn from_attrs(
        attrs: Vec<syn::Attribute>,
    ) -> syn::Result<(DeOptions, Vec<syn::Attribute>)> {
        let mut self_ = DeOptions::default();
        let mut errors = ErrorAccumulator::default();
        let mut others = vec![];
        for attr in attrs {
            if !attr.path.is_ident("declenum") {
                others.push(attr);
                continue;
            }
            errors.handle(attr.parse_args_with(|input: ParseStream| {
                DeOption::parse_several(input, |option| {
                    self_.update_from_option(option)
                })
            }));
        }
        errors.finish_with((self_, others))
    }
}

impl DeOption {
    fn parse_several(
        input: ParseStream,
        mut each: impl FnMut(DeOption) -> syn::Result<()>,
    ) -> syn::Result<()> {
        let options =
            Punctuated::<DeOption, Token![,]>::parse_terminated(input)?;
        for option in options {
            each(option)?;
        }
        Ok(())
    }
}

impl Parse for DeOption {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let kw = input.call(syn::Ident::parse_any)?;

        let from_od = |od| {
            Ok(DeOption {
                kw_span: kw.span(),
                od,
            })
        };

        // keyword!{ "KEYWORD": CONSTRUCTOR }
        // expands to   if ... { return ... }
        macro_rules! keyword { { $kw:literal: $od:expr } => {
            if kw == $kw {
                return from_od($od);
            }
        } }

        keyword! { "dbg": OD::Dbg }
        keyword! { "rename_all": {
            let _: Token![=] = input.parse()?;
            OD::RenameAll(input.parse()?)
        } }
        keyword! { "crate": {
            let _: Token![=] = input.parse()?;
            OD::Crate(input.call(syn::Path::parse_mod_style)?)
        } }

        Err(kw.error("unknown declenum option"))
    }
}

impl Parse for RenameAll {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // Accept `snake_case` and `"kebab-case"` alike
        let (text, span) = if input.peek(syn::LitStr) {
            let lit: syn::LitStr = input.parse()?;
            (lit.value(), lit.span())
        } else {
            let kw = input.call(Ident::parse_any)?;
            (kw.to_string(), kw.span())
        };
        text.parse().map_err(|e: String| syn::Error::new(span, e))
    }
}

//---------- processing ----------

impl DeOptions {
    /// Update `self` according to the option specified in `option`
    ///
    /// On error (eg, contradictory options), fails.
    fn update_from_option(&mut self, option: DeOption) -> syn::Result<()> {
        fn store<T>(
            already: &mut Option<(T, Span)>,
            new: T,
            span: Span,
            on_contradiction: impl Display,
        ) -> syn::Result<()>
        where
            T: PartialEq,
        {
            match already {
                Some((already, _)) if already == &new => Ok(()),
                Some((_, already)) => {
                    let mut err = syn::Error::new(span, &on_contradiction);
                    err.combine(syn::Error::new(
                        *already,
                        format!("{} (first option here)", on_contradiction),
                    ));
                    Err(err)
                }
                None => {
                    *already = Some((new, span));
                    Ok(())
                }
            }
        }

        match option.od {
            OD::Dbg => {
                self.dbg = true;
                Ok(())
            }
            OD::RenameAll(case) => store(
                &mut self.rename_all,
                case,
                option.kw_span,
                "contradictory `rename_all` options",
            ),
            OD::Crate(path) => store(
                &mut self.krate,
                path,
                option.kw_span,
                "contradictory `crate` options",
            ),
        }
    }

    /// The path to the facade crate, to use in the expansion
    pub fn crate_path(&self) -> syn::Result<TokenStream> {
        match &self.krate {
            Some((path, _)) => Ok(path.to_token_stream()),
            None => facade_crate_path(),
        }
    }

    /// The string to put in `NAMES` for the value `ident`
    pub fn value_name(&self, ident: &Ident) -> String {
        let name = ident.unraw().to_string();
        match self.rename_all {
            Some((case, _)) => case.apply(&name),
            None => name,
        }
    }
}
