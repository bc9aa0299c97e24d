use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    MetaNameValue,
    Result,
    Token,
};

/// The expressions given to the tags of the `error` attribute.
#[derive(Debug)]
struct Tags {
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Tags {
    /// Reads the tags from the `error` attribute of the struct. The `message` tag is required.
    fn from_struct(item: &ItemStruct) -> Result<Self> {
        let attr = item.attrs
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&item.ident, "missing `error` attribute"))?;

        let (mut message, mut labels, mut help) = (None, None, None);
        for tag in attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)? {
            let slot = if tag.path.is_ident("message") {
                &mut message
            } else if tag.path.is_ident("labels") {
                &mut labels
            } else if tag.path.is_ident("help") {
                &mut help
            } else {
                return Err(syn::Error::new_spanned(tag.path, "unknown tag"));
            };
            *slot = Some(tag.value);
        }

        let message = message
            .ok_or_else(|| syn::Error::new_spanned(attr, "missing `message` tag in `error` attribute"))?;
        Ok(Self { message, labels, help })
    }
}

/// Creates a `let` expression that destructures the given `ident` into its named fields. Returns
/// a compile error if the fields are not named.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let field_name = field.ident.as_ref();
                quote! { #field_name }
            });
            quote! { let #ident { #(#fields),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    tags: Tags,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let tags = Tags::from_struct(&item)?;
        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            tags,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure_expr = destructure_fields(&self.name, &self.fields);
        let message = &self.tags.message;
        let labels = self.tags.labels
            .as_ref()
            .map(|e| quote! { #e })
            .unwrap_or_else(|| quote! { [""] });
        let help = self.tags.help.as_ref().map(|e| quote! { builder.set_help(#e); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure_expr

                let start = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, start)
                    .with_message(#message)
                    .with_labels(
                        (#labels)
                            .into_iter()
                            .zip(spans.iter())
                            .map(|(label_str, span)| {
                                let mut label = ariadne::Label::new((src_id, span.clone()))
                                    .with_color(alg_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        });
    }
}
