// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DigestVector, Message};

/// All reference vectors, grouped by what they exercise.
pub static VECTORS: &[DigestVector] = &[
    // FIPS 180-4 / NIST examples
    DigestVector {
        name: "empty",
        message: Message::Text(""),
        hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        base64: "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=",
    },
    DigestVector {
        name: "abc",
        message: Message::Text("abc"),
        hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        base64: "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=",
    },
    // Case sensitivity
    DigestVector {
        name: "hello-capitalized",
        message: Message::Text("Hello"),
        hex: "185f8db32271fe25f561a6fc938b2e264306ec304eda518007d1764826381969",
        base64: "GF+NsyJx/iX1Yab8k4suJkMG7DBO2lGAB9F2SCY4GWk=",
    },
    DigestVector {
        name: "hello-lowercase",
        message: Message::Text("hello"),
        hex: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        base64: "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ=",
    },
    // Tool presets
    DigestVector {
        name: "preset-text",
        message: Message::Text("Hello, World!"),
        hex: "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f",
        base64: "3/1gIbsr1bCvZ2KQgJ7DpTGR3YHH9wpLKGiKNiGCmG8=",
    },
    DigestVector {
        name: "preset-password",
        message: Message::Text("MySecurePassword123"),
        hex: "ccf9ac1c9ce02b9bb7810a1fff51e474f37d98c3582f2d3b5036caf559afd9bc",
        base64: "zPmsHJzgK5u3gQof/1HkdPN9mMNYLy07UDbK9Vmv2bw=",
    },
    DigestVector {
        name: "preset-email",
        message: Message::Text("user@example.com"),
        hex: "b4c9a289323b21a01c3e940f150eb9b8c542587f1abfd8f0e1cc1ffc5e475514",
        base64: "tMmiiTI7IaAcPpQPFQ65uMVCWH8av9jw4cwf/F5HVRQ=",
    },
    DigestVector {
        name: "preset-url",
        message: Message::Text("https://www.example.com/page"),
        hex: "bc04e972e6b5d1660d62b603da7644e5a3bb6ac5b76cd7f08a780609d26a7984",
        base64: "vATpcua10WYNYrYD2nZE5aO7asW3bNfwingGCdJqeYQ=",
    },
    DigestVector {
        name: "quick-brown-fox",
        message: Message::Text("The quick brown fox jumps over the lazy dog"),
        hex: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        base64: "16j7swfXgJRpypq8sAguT41WUeRtPNt2LQLQvzfJ5ZI=",
    },
    // Multi-byte UTF-8
    DigestVector {
        name: "latin-1-accents",
        message: Message::Text("héllo wörld"),
        hex: "a1003f7d04a4115711d0b48a2eaf1359ce565d2d2a6fd65098dfcffadeeef59f",
        base64: "oQA/fQSkEVcR0LSKLq8TWc5WXS0qb9ZQmN/P+t7u9Z8=",
    },
    DigestVector {
        name: "astral-emoji",
        message: Message::Text("😀"),
        hex: "f0443a342c5ef54783a111b51ba56c938e474c32324d90c3a60c9c8e3a37e2d9",
        base64: "8EQ6NCxe9UeDoRG1G6Vsk45HTDIyTZDDpgycjjo34tk=",
    },
    // Padding boundaries
    DigestVector {
        name: "a-x55",
        message: Message::Repeated { byte: b'a', count: 55 },
        hex: "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
        base64: "n0OQ+NMMLdkuyfCVtl4rmumwqSWlJY4kHJ8ekQ9zQxg=",
    },
    DigestVector {
        name: "a-x56",
        message: Message::Repeated { byte: b'a', count: 56 },
        hex: "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a",
        base64: "s1Q5pKxvCUi21vnjxq8PX1kM4g8b3nCQ73lwaG7Gc4o=",
    },
    DigestVector {
        name: "fips-two-block-56",
        message: Message::Text("abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        base64: "JI1qYdIGOLjlwCaTDD5gOaM85Flk/yFn9uzt1BnbBsE=",
    },
    DigestVector {
        name: "a-x63",
        message: Message::Repeated { byte: b'a', count: 63 },
        hex: "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34",
        base64: "fT50oF19sVvOStnsBljqmOPwbu7PFrTG//LaRX3cLzQ=",
    },
    DigestVector {
        name: "a-x64",
        message: Message::Repeated { byte: b'a', count: 64 },
        hex: "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
        base64: "/+BU/nrgy23GXDr5th1SCfQ5hR20PQulmXM33xVGaOs=",
    },
    DigestVector {
        name: "a-x65",
        message: Message::Repeated { byte: b'a', count: 65 },
        hex: "635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0",
        base64: "Y1NhxIu56rFBmOduqKt/GkFoXWrWKqkUbTAdTxfrCuA=",
    },
    DigestVector {
        name: "fips-two-block-112",
        message: Message::Text(
            "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        hex: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
        base64: "z1sWp3ivg4ADbOWeewSSNwskmxHo8HpRr6xFA3r+6dE=",
    },
    DigestVector {
        name: "a-x119",
        message: Message::Repeated { byte: b'a', count: 119 },
        hex: "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb",
        base64: "MeulHDE6XAgiat8Y1KNZz9/Y0ugWsT9K+VL36mWE3Ps=",
    },
    DigestVector {
        name: "a-x120",
        message: Message::Repeated { byte: b'a', count: 120 },
        hex: "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c",
        base64: "Lz0zVDLHC1gK8Ojhs2dKfAINaDql9zqq7f3FWvkEwhw=",
    },
    // FIPS 180-4 long message: one million 'a'
    DigestVector {
        name: "a-x1000000",
        message: Message::Repeated { byte: b'a', count: 1_000_000 },
        hex: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        base64: "zcduXJkU+5KBocfihNc+Z/GAmkiklyAOBG05zMcRLNA=",
    },
];
