#[macro_use]
mod common;

#[cfg(test)]
mod method {
    tests! {
        this_binding in method is OK
        "Hello, World"
    }

    tests! {
        bound_method in method is OK
        "Jane"
    }
}
