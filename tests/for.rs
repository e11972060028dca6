#[macro_use]
mod common;

#[cfg(test)]
mod for_loop {
    tests! {
        counting in for_loop is OK
        "0"
        "1"
        "2"
    }

    tests! {
        closure_in_body in for_loop is OK
        "3"
    }

    tests! {
        condition_only in for_loop is OK
        "0"
        "1"
    }

    tests! {
        statement_initializer in for_loop is OK
        "0"
        "1"
        "2"
    }
}
