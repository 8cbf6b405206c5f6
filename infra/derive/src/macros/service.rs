use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{Ident, ItemStruct};

pub fn expand(args: TokenStream, input: ItemStruct) -> TokenStream {
    let mut token: Option<Ident> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("token") {
            token = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported reviewer_service argument, expected `token = <Variant>`"))
        }
    });
    if let Err(err) = parser.parse2(args) {
        return err.into_compile_error();
    }
    let Some(token) = token else {
        return syn::Error::new_spanned(
            &input.ident,
            "reviewer_service requires `token = <ComponentToken variant>`",
        )
        .into_compile_error();
    };

    let handle = &input.ident;
    let inner = format_ident!("{handle}Inner");
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let semi = input.semi_token;

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #inner #fields #semi

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: std::sync::Arc<#inner>,
        }

        impl #handle {
            /// Token this handle is registered under.
            pub const TOKEN: ::reviewer_kernel::domain::registry::ComponentToken =
                ::reviewer_kernel::domain::registry::ComponentToken::#token;

            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }

            /// Whether both handles point at the same instance.
            #[must_use]
            pub fn same_instance(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.inner, &other.inner)
            }
        }

        impl std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::reviewer_kernel::domain::registry::Service for #handle {
            fn token(&self) -> ::reviewer_kernel::domain::registry::ComponentToken {
                Self::TOKEN
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}
