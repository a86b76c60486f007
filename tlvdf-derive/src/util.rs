use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use syn::spanned::Spanned;

pub(crate) fn make_err<T>(tok: &impl Spanned, msg: &str) -> Result<T, syn::Error> {
    Err(syn::Error::new(tok.span(), msg))
}

/// Extracts a literal value out of some `name = value` meta item.
///
/// # Example
///
/// ```ignore
/// get_lit!(nv.value, Int, "expected an integer literal")?;
/// ```
macro_rules! get_lit {
    ($($expr:ident).+, $lit_ty:ident, $err:literal $(,)?) => {
        match $($expr).+ {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::$lit_ty(ref x),
                ..
            }) => Ok(x),
            _ => Err(syn::Error::new($($expr).+.span(), $err)),
        }
    };
}

pub(crate) fn get_lit_str(expr: &syn::Expr) -> syn::Result<&syn::LitStr> {
    get_lit!(expr, Str, "expected a string literal")
}

pub(crate) fn get_lit_int(expr: &syn::Expr) -> syn::Result<&syn::LitInt> {
    get_lit!(expr, Int, "expected an integer literal")
}

/// Parses a string literal holding a path, e.g. `nested = "super::Slice"`.
pub(crate) fn parse_path(expr: &syn::Expr) -> syn::Result<syn::Path> {
    let s = get_lit_str(expr)?;
    syn::parse_str::<syn::Path>(&s.value()).map_err(|e| syn::Error::new(s.span(), e))
}

/// Parses one integer literal, or an array/tuple of them.
pub(crate) fn parse_usizes(expr: &syn::Expr) -> syn::Result<Vec<usize>> {
    let xs = unpack_expr(expr);
    let mut ret = Vec::with_capacity(xs.len());
    for x in xs {
        ret.push(get_lit_int(x)?.base10_parse()?);
    }
    Ok(ret)
}

/// Unpacks an array or tuple expression into its individual elements. Otherwise, return the
/// original expression.
pub(crate) fn unpack_expr(expr: &syn::Expr) -> Vec<&syn::Expr> {
    match expr {
        syn::Expr::Array(xs) => xs.elems.iter().collect(),
        syn::Expr::Tuple(xs) => xs.elems.iter().collect(),
        _ => vec![expr],
    }
}

#[cfg(test)]
mod test_unpack_expr {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn can_unpack_array_literals() {
        let x: syn::Expr = parse_quote! { 1 };
        let y: syn::Expr = parse_quote! { 2 };
        let xs: syn::Expr = parse_quote! { [#x, #y] };
        assert_eq!(unpack_expr(&xs), vec![&x, &y]);
    }

    #[test]
    fn unpacks_single_expr() {
        let x: syn::Expr = parse_quote! { 1 };
        assert_eq!(unpack_expr(&x), vec![&x]);
    }

    #[test]
    fn parses_length_lists() {
        let single: syn::Expr = parse_quote! { 4 };
        let many: syn::Expr = parse_quote! { [1, 0x02, 16] };
        assert_eq!(parse_usizes(&single).unwrap(), vec![4]);
        assert_eq!(parse_usizes(&many).unwrap(), vec![1, 2, 16]);

        let bad: syn::Expr = parse_quote! { ["1"] };
        assert!(parse_usizes(&bad).is_err());
    }

    #[test]
    fn parses_paths_from_strings() {
        let expr: syn::Expr = parse_quote! { "super::common::Supi" };
        let path = parse_path(&expr).unwrap();
        assert_eq!(path.segments.len(), 3);

        let bad: syn::Expr = parse_quote! { "not a path!" };
        assert!(parse_path(&bad).is_err());
    }
}

pub(crate) trait CaseConvert {
    fn to_tlvdf_snake_case(&self) -> String;
    fn to_tlvdf_title_case(&self) -> String;
    /// ASN.1 identifiers are the type-style name with a lowercased first letter, e.g.
    /// `PDUSessionEstablishment` becomes `pDUSessionEstablishment`.
    fn to_asn1_case(&self) -> String;
}

impl<T: ToString> CaseConvert for T {
    fn to_tlvdf_snake_case(&self) -> String {
        static RE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(([a-z0-9])?([A-Z]))|(\s+(\w))")
                .expect("regexp for Camel/Pascal case should be valid")
        });

        RE.replace_all(&self.to_string(), |captures: &Captures| {
            if let Some(c) = captures.get(5) {
                return format!("_{}", c.as_str().to_ascii_lowercase());
            }
            let x = captures[3].to_ascii_lowercase();
            match captures.get(2) {
                None => x,
                Some(c) => format!("{}_{}", c.as_str(), x),
            }
        })
        .to_string()
    }

    fn to_tlvdf_title_case(&self) -> String {
        let s = self.to_tlvdf_snake_case();
        let words = s.split('_').filter(|word| !word.trim().is_empty());
        let mut ret = String::new();
        for word in words {
            let mut cs = word.chars();
            let new_word = match cs.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(cs).collect(),
            };
            ret.push_str(&new_word);
            ret.push(' ');
        }
        ret.trim().to_string()
    }

    fn to_asn1_case(&self) -> String {
        let s = self.to_string();
        let mut cs = s.chars();
        match cs.next() {
            None => String::new(),
            Some(c) => c.to_lowercase().chain(cs).collect(),
        }
    }
}

#[cfg(test)]
mod test_case_convert {
    use super::CaseConvert;

    #[test]
    fn to_tlvdf_snake_case_works() {
        let tests = [
            ("FooBar", "foo_bar"),
            ("foo_bar", "foo_bar"),
            ("fooBar", "foo_bar"),
            ("_FooBar_", "_foo_bar_"),
            ("Foo Bar", "foo_bar"),
            ("SUPI", "supi"),
            ("PDUSessionID", "pdusession_id"),
            ("FiveGGUTI", "five_gguti"),
            ("IPv4Address", "ipv4_address"),
            ("Ipv4Addr", "ipv4_addr"),
        ];

        for (tt, want) in tests {
            assert_eq!(tt.to_tlvdf_snake_case(), want);
        }
    }

    #[test]
    fn to_tlvdf_title_case_works() {
        let tests = [
            ("FooBar", "Foo Bar"),
            ("foo_bar", "Foo Bar"),
            ("__foo_bar__", "Foo Bar"),
            ("NumPhones", "Num Phones"),
        ];

        for (tt, want) in tests {
            assert_eq!(tt.to_tlvdf_title_case(), want);
        }
    }

    #[test]
    fn to_asn1_case_works() {
        let tests = [
            ("Registration", "registration"),
            ("PDUSessionEstablishment", "pDUSessionEstablishment"),
            ("SUPI", "sUPI"),
            ("", ""),
        ];

        for (tt, want) in tests {
            assert_eq!(tt.to_asn1_case(), want);
        }
    }
}
