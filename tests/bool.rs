#[macro_use]
mod common;

#[cfg(test)]
mod bool {
    tests! {
        truthiness in bool is OK
        "1"
        "1"
        "2"
    }

    tests! {
        equality in bool is OK
        "true"
        "false"
        "false"
        "false"
        "true"
        "false"
    }

    tests! {
        not in bool is OK
        "false"
        "true"
        "true"
        "false"
        "true"
    }
}
