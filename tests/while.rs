#[macro_use]
mod common;

#[cfg(test)]
mod while_loop {
    tests! {
        counting in while_loop is OK
        "0"
        "1"
        "2"
    }

    tests! {
        false_condition in while_loop is OK
        "done"
    }
}
