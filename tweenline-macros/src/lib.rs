//! Defines the Tweenline runtime macros.

#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

extern crate proc_macro;

use proc_macro::TokenStream;

use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Macro definition for the Tweenline runtime.
///
/// This macro should be used once only in a project.
/// This macro requires `tokio` as a dependency.
///
/// _Executes the entire function in a blocking thread and provides synchronization for waiting on all
/// subsequently and dynamically created tasks (using `task::run`)._
///
/// # Example
/// ```
/// #[tweenline_macros::runtime]
/// async fn main() {
///     // whatever
/// }
/// ```
#[proc_macro_attribute]
pub fn runtime(_: TokenStream, item: TokenStream) -> TokenStream {
    macro_inner(item, false)
}

/// Same as `#[tweenline_macros::runtime]` but for tests.
#[proc_macro_attribute]
pub fn test(_: TokenStream, item: TokenStream) -> TokenStream {
    macro_inner(item, true)
}

fn macro_inner(item: TokenStream, test: bool) -> TokenStream {
    let tweenline = tweenline_crate_path();

    let input = parse_macro_input!(item as ItemFn);

    if input.sig.asyncness.is_none() {
        let error = syn::Error::new_spanned(input.sig.fn_token, "runtime functions must be async")
            .to_compile_error();
        return quote! {
            #error
            #input
        }
        .into();
    }

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    // Define the #[tokio::main] / #[tokio::test] tokio macro attribute.
    let tokio_main_attr = match test {
        true => quote! {
            #[#tweenline::utils::tokio::test]
        },
        false => quote! {
            #[#tweenline::utils::tokio::main]
        },
    };

    let modified_block = quote! {
        {
            // Install the process-wide task channel `task::run` reports to (idempotent).
            #tweenline::utils::task::init_task_channel().await;

            let result = #block;

            // Wait for all dynamically spawned tasks to complete. Tasks registered while
            // draining (nested `task::run` calls, event callbacks) are queued behind
            // their spawner and picked up on a later turn of this loop.
            {
                let cell = #tweenline::utils::task::RUNTIME_RX
                    .get()
                    .ok_or(#tweenline::errors::RuntimeError)
                    .unwrap();
                let mut lock = cell.lock();
                let receiver = lock
                    .as_mut()
                    .ok_or(#tweenline::errors::RuntimeError)
                    .unwrap();

                while receiver.len() > 0 {
                    // We receive the task specific receiver...
                    if let Some(mut task_rx) = receiver.recv().await {
                        // ...then the task result through that receiver.
                        if let Some(task_result) = task_rx.recv().await {
                            match task_result {
                                #tweenline::utils::task::TaskResult::Ok => {}
                                #tweenline::utils::task::TaskResult::Err(err) => {
                                    #tweenline::utils::log::error!("Task failed: {}", err);
                                }
                            }
                        }
                    }
                }
            }

            result
        }
    };

    // Reconstruct the function with the modified block
    let output = quote! {
        #tokio_main_attr
        #(#attrs)*
        #vis #sig
        #modified_block
    };

    // Return the modified function as a TokenStream
    output.into()
}

/// Determines what crate name should be used to refer to the tweenline library:
/// crate::... or tweenline::... depending.
fn tweenline_crate_path() -> syn::Path {
    let is_internal = std::env::var("CARGO_CRATE_NAME")
        .map(|pkg_name| pkg_name == "tweenline")
        .unwrap_or_default();

    if is_internal {
        syn::parse_quote!(crate)
    } else {
        syn::parse_quote!(tweenline)
    }
}
